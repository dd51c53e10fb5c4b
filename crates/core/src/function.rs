/// A pure, side-effect-free scalar function of one real variable.
///
/// Solvers only need [`Function::call`]. The batch form exists for callers
/// that sample a function over many points, such as a plotting layer, and
/// applies the function element-wise.
///
/// Closures of the form `Fn(f64) -> f64` implement `Function` automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;

    /// Evaluates the function at every element of `xs`, preserving order.
    fn call_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.call(x)).collect()
    }
}

/// Blanket implementation for closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_functions() {
        let square = |x: f64| x * x;
        assert_relative_eq!(Function::call(&square, 3.0), 9.0);
    }

    #[test]
    fn batch_applies_element_wise() {
        let shifted = |x: f64| x - 1.0;
        let ys = Function::call_batch(&shifted, &[0.0, 1.0, 2.5]);
        assert_eq!(ys, vec![-1.0, 0.0, 1.5]);
    }

    #[test]
    fn batch_of_empty_slice_is_empty() {
        let identity = |x: f64| x;
        assert!(Function::call_batch(&identity, &[]).is_empty());
    }
}
