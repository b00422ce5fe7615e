use gpui::SharedString;

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

/// Presentation shared by every labeled form control.
pub trait FieldLike: Sized {
    fn label(self, value: impl Into<SharedString>) -> Self;
    fn description(self, value: impl Into<SharedString>) -> Self;
    fn error(self, value: impl Into<SharedString>) -> Self;
    fn required(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_field_like {
    ($type:ty) => {
        impl $crate::contracts::FieldLike for $type {
            fn label(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::label(self, value)
            }

            fn description(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::description(self, value)
            }

            fn error(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::error(self, value)
            }

            fn required(self, value: bool) -> Self {
                <$type>::required(self, value)
            }
        }
    };
}
