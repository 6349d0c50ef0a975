//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing, and helpers to render a sequence of inputs into source text.

use std::fmt::{Display, Write};

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<T, U> Input<Option<T>> for Option<U>
where
    U: Input<T>,
{
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(_), None) => Err(TestCaseError::fail("expected Some, found None")),
            (None, Some(_)) => Err(TestCaseError::fail("expected None, found Some")),
        }
    }
}

impl<T, U> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}

impl<T, U> Input<&Vec<T>> for &Vec<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &Vec<T>) -> TestCaseResult { self.as_slice().assert(output.as_slice()) }
}

/// Renders the given inputs back to back, placing `separator` between each pair of them.
///
/// The generated inputs implement [`Display`] by printing the source text they stand for, so
/// the rendered string is the source text of the whole sequence.
pub fn render<T: Display, S: Display>(inputs: &[T], separator: impl Fn(usize) -> S) -> String {
    let mut source = String::new();

    for (index, input) in inputs.iter().enumerate() {
        if index > 0 {
            // writing to a string never fails
            let _ = write!(source, "{}", separator(index - 1));
        }

        let _ = write!(source, "{input}");
    }

    source
}
