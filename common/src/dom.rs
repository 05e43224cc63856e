//! The few DOM capabilities the handlers need, kept behind traits so the
//! handler bodies run the same against `web-sys` elements and test fakes.

/// An input that supports native constraint validation.
pub trait ValidityField {
    fn value(&self) -> String;
    /// An empty message marks the field as valid again.
    fn set_custom_validity(&self, message: &str);
}

/// A form that can aggregate the validity of its fields.
pub trait ValidatableForm {
    fn check_validity(&self) -> bool;
    /// Must be idempotent.
    fn add_class(&self, class: &str);
}

/// The cancellation side of a submit event.
pub trait SubmitControl {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// Where the strength meter writes its result.
pub trait StrengthDisplay {
    fn show(&self, score: u8, label: &str);
    fn clear(&self);
}
