use delegates::{Delegate, Delegate0, Delegate1, Delegate2, Delegate9};

/// Not [`Clone`], so it can only reach the target by being moved.
#[derive(Debug, PartialEq)]
struct Token(String);

#[test]
fn by_value_arguments_are_moved() {
    let token = Token(String::from("payload"));
    let buffer = token.0.as_ptr();

    let mut delegate: Delegate1<Token, (Token, *const u8)> = Delegate1::new();
    delegate.bind_function(|token| {
        let address = token.0.as_ptr();
        (token, address)
    });

    let (returned, address) = delegate.invoke(token).unwrap();
    assert_eq!(returned, Token(String::from("payload")));
    assert_eq!(address, buffer, "argument was copied instead of moved");
}

#[test]
fn reference_arguments_are_forwarded() {
    fn first_and_address(bytes: &[u8]) -> (Option<u8>, *const u8) {
        (bytes.first().copied(), bytes.as_ptr())
    }

    let bytes = [7u8, 8, 9];
    let mut delegate: Delegate1<&[u8], (Option<u8>, *const u8)> = Delegate1::new();
    delegate.bind_function(first_and_address);

    let (first, address) = delegate.invoke(&bytes).unwrap();
    assert_eq!(first, Some(7));
    assert!(core::ptr::eq(address, bytes.as_ptr()));
}

#[test]
fn mutable_reference_arguments() {
    fn push_twice(values: &mut Vec<i32>, value: i32) {
        values.push(value);
        values.push(value);
    }

    let mut values = vec![1];

    {
        let mut delegate: Delegate2<&mut Vec<i32>, i32> = Delegate2::new();
        delegate.bind_function(push_twice);
        delegate.invoke(&mut values, 5).unwrap();
    }

    assert_eq!(values, [1, 5, 5]);
}

#[test]
fn mixed_value_and_reference_arguments() {
    struct Prefixer {
        prefix: &'static str,
    }

    impl Prefixer {
        fn prefix(&self, text: String, separator: &char) -> String {
            format!("{}{separator}{text}", self.prefix)
        }
    }

    let prefixer = Prefixer { prefix: "id" };
    let separator = ':';

    let mut delegate: Delegate2<String, &char, String> = Delegate2::new();
    delegate.bind_method(&prefixer, Prefixer::prefix);

    assert_eq!(
        delegate.invoke(String::from("42"), &separator).as_deref(),
        Ok("id:42")
    );
}

#[test]
fn no_arguments() {
    let mut delegate: Delegate0<&'static str> = Delegate0::new();
    delegate.bind_function(|| "called");
    assert_eq!(delegate.invoke(), Ok("called"));
}

#[test]
fn nine_arguments() {
    #[allow(clippy::too_many_arguments)]
    fn digits(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8) -> u64 {
        [a, b, c, d, e, f, g, h, i]
            .into_iter()
            .fold(0, |number, digit| number * 10 + u64::from(digit))
    }

    let mut delegate: Delegate9<u8, u8, u8, u8, u8, u8, u8, u8, u8, u64> = Delegate9::new();
    delegate.bind_function(digits);

    assert_eq!(delegate.invoke(1, 2, 3, 4, 5, 6, 7, 8, 9), Ok(123_456_789));
}

#[test]
fn tuple_invocation() {
    let mut delegate: Delegate<(i32, i32), i32> = Delegate::new();
    delegate.bind_closure(|a, b| a - b);

    assert_eq!(delegate.invoke_with((10, 3)), Ok(7));
    assert_eq!(delegate.invoke(10, 3), delegate.invoke_with((10, 3)));
}
