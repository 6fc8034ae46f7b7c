/// Whether the concrete type `$ty` implements `$trait`.
///
/// Inherent associated consts take precedence over trait ones, so the
/// inherent `IMPLS` is only found when the bound on its impl holds.
macro_rules! implements {
    ($ty:ty: $trait:path) => {{
        #[allow(dead_code)]
        trait DoesNotImpl {
            const IMPLS: bool = false;
        }
        impl<T: ?Sized> DoesNotImpl for T {}

        struct Wrapper<T: ?Sized>(std::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $trait> Wrapper<T> {
            const IMPLS: bool = true;
        }

        <Wrapper<$ty>>::IMPLS
    }};
}

pub fn assert_same<A: 'static, B: 'static>() {
    assert_eq!(
        std::any::TypeId::of::<A>(),
        std::any::TypeId::of::<B>(),
        "{} should be {}",
        std::any::type_name::<A>(),
        std::any::type_name::<B>()
    );
}
