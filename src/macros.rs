//! Macros for ergonomic state construction.

/// Build a [`SystemState`](crate::core::SystemState) from literals.
///
/// # Example
///
/// ```
/// use crossway::system_state;
///
/// let state = system_state! {
///     "bank1": ["beans", "boat", "fox", "goose"],
///     "bank2": [],
/// };
///
/// assert_eq!(state.substate_count(), 2);
/// assert!(state.contains("bank1", "fox"));
/// ```
#[macro_export]
macro_rules! system_state {
    (
        $(
            $label:literal : [ $( $item:literal ),* $(,)? ]
        ),* $(,)?
    ) => {{
        let mut substates = ::std::collections::BTreeMap::new();
        $(
            let mut items = ::std::collections::BTreeSet::new();
            $(
                items.insert(::std::string::String::from($item));
            )*
            substates.insert(::std::string::String::from($label), items);
        )*
        $crate::core::SystemState::from_substates(substates)
    }};
}
