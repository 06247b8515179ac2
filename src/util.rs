//! Small helpers shared by the commands.

/// `value`, or `default` when `value` is its type's zero value
/// (`T::default()`).
#[must_use]
pub fn get_or_default<T: Default + PartialEq>(value: T, default: T) -> T {
    if value == T::default() {
        default
    } else {
        value
    }
}
