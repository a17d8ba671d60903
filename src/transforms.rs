//! Transform pipeline infrastructure
//!
//! Stages implement [`Runnable<I, O>`]; a [`Transform<I, O>`] chains them with `.then()`, and
//! the compiler only lets a stage follow another when the types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Segmentation)   // String → Vec<Paragraph>
//!     .then(Building)       // Vec<Paragraph> → Vec<Element>
//!     .then(Rendering);     // Vec<Element> → String
//! ```
//!
//! The pipelines used by the compiler and the CLI are built once as `Lazy` statics in
//! [`standard`]; the individual stages live in [`stages`].

pub mod stages;
pub mod standard;

use crate::error::CompileError;

/// Anything that turns an `I` into an `O`
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, CompileError>;
}

/// A composable transformation from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, CompileError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, CompileError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Feed this transform's output into `stage`.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, CompileError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, CompileError> {
        Transform::run(self, input)
    }
}
