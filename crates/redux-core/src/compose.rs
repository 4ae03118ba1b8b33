//! Right-to-left function composition

/// A boxed single-argument function returning its argument type
pub type Unary<T> = Box<dyn Fn(T) -> T>;

/// Compose functions right to left: `compose(vec![f, g, h])(x) == f(g(h(x)))`
///
/// With no functions the result is the identity; a single function is
/// returned as is.
pub fn compose<T: 'static>(mut funcs: Vec<Unary<T>>) -> Unary<T> {
    let Some(last) = funcs.pop() else {
        return Box::new(|arg| arg);
    };
    if funcs.is_empty() {
        return last;
    }
    Box::new(compose_with(funcs, last))
}

/// Like [`compose`], but the innermost function takes its own argument type.
///
/// `last` receives all arguments (use a tuple for several), the `outer`
/// functions are then applied right to left to its result.
pub fn compose_with<Args, T, L>(outer: Vec<Unary<T>>, last: L) -> impl Fn(Args) -> T
where
    L: Fn(Args) -> T,
{
    move |args| outer.iter().rev().fold(last(args), |acc, f| f(acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_nothing_is_identity() {
        let identity = compose::<i32>(Vec::new());
        assert_eq!(identity(42), 42);
    }

    #[test]
    fn test_compose_single_function() {
        let double: Unary<i32> = Box::new(|x| x * 2);
        let composed = compose(vec![double]);
        assert_eq!(composed(21), 42);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let f: Unary<String> = Box::new(|s| format!("f({})", s));
        let g: Unary<String> = Box::new(|s| format!("g({})", s));
        let h: Unary<String> = Box::new(|s| format!("h({})", s));

        let composed = compose(vec![f, g, h]);
        assert_eq!(composed("x".to_string()), "f(g(h(x)))");
    }

    #[test]
    fn test_compose_with_passes_all_arguments_to_last() {
        let add_one: Unary<i32> = Box::new(|x| x + 1);
        let square: Unary<i32> = Box::new(|x| x * x);

        let composed = compose_with(vec![add_one, square], |(a, b): (i32, i32)| a + b);
        // add_one(square(2 + 3))
        assert_eq!(composed((2, 3)), 26);
    }
}
