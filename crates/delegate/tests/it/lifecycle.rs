use delegates::{Delegate, Delegate1, Delegate2, TargetKind};
use std::{cell::Cell, rc::Rc};

#[test]
fn clones_share_the_bound_instance() {
    let hits = Cell::new(0u32);

    let mut original: Delegate1<u32> = Delegate1::new();
    original.bind_method(&hits, |hits, amount| hits.set(hits.get() + amount));

    let copy = original.clone();
    original.invoke(1).unwrap();
    copy.invoke(10).unwrap();

    assert_eq!(hits.get(), 11);
    assert_eq!(copy.target_kind(), Some(TargetKind::Method));
}

#[test]
fn rebinding_a_clone_leaves_the_original() {
    let mut original: Delegate1<i32, i32> = Delegate1::new();
    original.bind_function(|value| value + 1);

    let mut copy = original.clone();
    copy.bind_function(|value| value * 2);

    assert_eq!(original.invoke(5), Ok(6));
    assert_eq!(copy.invoke(5), Ok(10));
}

#[test]
fn captured_state_is_released_once() {
    let token = Rc::new(());

    let mut delegate: Delegate2<i32, i32, i32> = Delegate2::new();
    delegate.bind_closure({
        let token = token.clone();
        move |a, b| {
            let _token = &token;
            a + b
        }
    });
    assert_eq!(Rc::strong_count(&token), 2);

    let copy = delegate.clone();
    assert_eq!(Rc::strong_count(&token), 3);
    assert_eq!(copy.invoke(2, 3), Ok(5));

    delegate.bind_function(|a, b| a * b);
    assert_eq!(Rc::strong_count(&token), 2);
    assert_eq!(delegate.invoke(2, 3), Ok(6));

    drop(copy);
    assert_eq!(Rc::strong_count(&token), 1);
}

#[test]
fn unbind_releases_target() {
    let token = Rc::new(());

    let mut delegate: Delegate1<u8> = Delegate1::new();
    delegate.bind_closure({
        let token = token.clone();
        move |_| {
            let _token = &token;
        }
    });

    delegate.unbind();
    assert_eq!(Rc::strong_count(&token), 1);
    assert!(!delegate.is_bound());
    assert_eq!(delegate.target_kind(), None);
    assert!(delegate.invoke(0).is_err());

    // Unbinding twice is harmless.
    delegate.unbind();
}

#[test]
#[cfg(feature = "alloc")]
fn large_closures_are_shared_between_clones() {
    let token = Rc::new(());
    let weights = [1u64, 2, 3, 4];

    let mut delegate: Delegate1<u64, u64> = Delegate1::new();
    delegate.bind_closure({
        let token = token.clone();
        move |value| {
            let _token = &token;
            weights.iter().map(|weight| weight * value).sum()
        }
    });

    // Stored in a single `Rc`, the closure itself is not cloned.
    let copy = delegate.clone();
    assert_eq!(Rc::strong_count(&token), 2);

    assert_eq!(delegate.invoke(2), Ok(20));
    assert_eq!(copy.invoke(1), Ok(10));

    drop(delegate);
    assert_eq!(copy.invoke(3), Ok(30));
    drop(copy);
    assert_eq!(Rc::strong_count(&token), 1);

    let formatted = format!("{:?}", {
        let mut delegate: Delegate1<u64, u64> = Delegate1::new();
        delegate.bind_closure(move |value| weights.iter().sum::<u64>() + value);
        delegate
    });
    assert!(formatted.contains("strong_count: 1"), "{formatted}");
}

#[test]
#[cfg(not(feature = "alloc"))]
#[should_panic(expected = "closure requires a heap allocation")]
fn large_closures_require_alloc() {
    let weights = [1u64, 2, 3, 4];

    let mut delegate: Delegate1<u64, u64> = Delegate1::new();
    delegate.bind_closure(move |value| weights.iter().sum::<u64>() + value);
}

#[test]
fn size_does_not_depend_on_target() {
    type Small<'a> = Delegate<'a, (u8,)>;
    type Large<'a> = Delegate<'a, (String, Vec<u8>, [u64; 16]), [u64; 16]>;

    assert_eq!(core::mem::size_of::<Small>(), core::mem::size_of::<Large>());
    assert!(core::mem::size_of::<Small>() <= 5 * core::mem::size_of::<usize>());
}

#[test]
fn default_is_unbound() {
    let delegate: Delegate2<i32, i32> = Delegate::default();
    assert!(!delegate.is_bound());

    const UNBOUND: Delegate2<'static, i32, i32> = Delegate::UNBOUND;
    assert!(!UNBOUND.is_bound());
}

#[test]
fn debug_shows_binding() {
    fn nothing(_: i32, _: i32) {}

    let mut delegate: Delegate2<i32, i32> = Delegate2::new();
    assert_eq!(format!("{delegate:?}"), "Delegate(Unbound)");

    delegate.bind_function(nothing);
    let formatted = format!("{delegate:?}");
    assert!(formatted.contains("kind: Function"), "{formatted}");
    assert!(formatted.contains("fn(i32, i32)"), "{formatted}");
}
