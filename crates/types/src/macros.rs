//! Declarative constructors for wire documents and arrays.

/// Builds a [`Document`](crate::Document) from `key => value` pairs.
///
/// Values go through `Value::from`, so native literals work directly:
///
/// ```
/// use vellum_types::doc;
///
/// let d = doc! { "status" => "active", "retries" => 3 };
/// assert_eq!(d.len(), 2);
/// ```
#[macro_export]
macro_rules! doc {
    () => { $crate::Document::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $( document.insert($key, $crate::Value::from($value)); )+
        document
    }};
}

/// Builds a `Value::Array` from element expressions.
#[macro_export]
macro_rules! arr {
    ($($element:expr),* $(,)?) => {
        $crate::Value::Array(vec![$($crate::Value::from($element)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_doc_macro_orders_and_converts() {
        let d = doc! { "a" => 1, "b" => "two", "c" => true };
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(d.get("b"), Some(&Value::String("two".into())));
    }

    #[test]
    fn test_nested_macros() {
        let d = doc! { "tags" => doc! { "$in" => arr![1, 2, 3] } };
        let inner = d.get("tags").and_then(Value::as_document).unwrap();
        assert_eq!(
            inner.get("$in"),
            Some(&Value::Array(vec![
                Value::Int32(1),
                Value::Int32(2),
                Value::Int32(3)
            ]))
        );
    }

    #[test]
    fn test_empty_doc() {
        assert!(doc! {}.is_empty());
    }
}
