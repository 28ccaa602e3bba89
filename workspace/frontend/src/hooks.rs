/// API fetch state enum
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Success(T),
    Error(String),
}
