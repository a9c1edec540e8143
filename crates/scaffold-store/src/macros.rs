/// Build a [`Record`](crate::Record) from `key => value` pairs.
///
/// ```
/// let row = scaffold_store::record! { "skillName" => "Go", "level" => 3 };
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {
        [ $( (::std::string::String::from($key), $crate::Value::from($value)), )+ ]
            .into_iter()
            .collect::<$crate::Record>()
    };
}
