/// Trait deciding how an error joins an aggregated error list.
///
/// [`Chain::plus`] collects the errors of both operands into one ordered
/// list. A scalar error is appended as a single element; an error that is
/// itself a `Vec` is spliced in flat, one level deep, so aggregating already
/// aggregated failures does not nest lists inside lists.
///
/// The list item type is picked by the `failure_fn` handed to `plus`: a
/// handler taking `Vec<String>` flattens `Vec<String>`-typed errors, while a
/// handler taking `Vec<Vec<String>>` keeps them whole.
///
/// [`Chain::plus`]: crate::Chain::plus
pub trait ErrorSplice<Item> {
    /// Splice this error into the given list.
    fn splice_into(self, errors: &mut Vec<Item>);
}

impl<T> ErrorSplice<T> for T {
    fn splice_into(self, errors: &mut Vec<T>) {
        errors.push(self);
    }
}

impl<T> ErrorSplice<T> for Vec<T> {
    fn splice_into(self, errors: &mut Vec<T>) {
        errors.extend(self);
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorSplice;

    #[test]
    fn test_scalar_appends_one_element() {
        let mut errors = vec!["first".to_string()];
        "second".to_string().splice_into(&mut errors);
        assert_eq!(errors, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_list_splices_flat() {
        let mut errors: Vec<String> = Vec::new();
        vec!["a".to_string(), "b".to_string()].splice_into(&mut errors);
        assert_eq!(errors, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_list_kept_whole_when_item_is_a_list() {
        let mut errors: Vec<Vec<String>> = Vec::new();
        vec!["a".to_string()].splice_into(&mut errors);
        assert_eq!(errors, vec![vec!["a".to_string()]]);
    }
}
