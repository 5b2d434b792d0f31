use std::borrow::{Borrow, BorrowMut};

use crate::model::common::Color;
use crate::proto::common::types as common_types;
use crate::wrapper::{wrapper, Wrapper, WrapperMut};

wrapper!(
    /// A project net class; read-only through the API.
    NetClass => common_types::NetClass
);

impl<P: Borrow<common_types::NetClass>> NetClass<P> {
    pub fn name(&self) -> &str {
        &self.proto().name
    }

    pub fn priority(&self) -> i32 {
        self.proto().priority
    }

    pub fn clearance(&self) -> Option<i64> {
        self.proto().clearance.map(|clearance| clearance.value_nm)
    }

    pub fn track_width(&self) -> Option<i64> {
        self.proto().track_width.map(|width| width.value_nm)
    }

    pub fn board_color(&self) -> Option<Color<&common_types::Color>> {
        self.proto().board_color.as_ref().map(Color::from_proto)
    }
}

wrapper!(
    /// Project text variables, referenced from text as `${NAME}`.
    TextVariables => common_types::TextVariables
);

impl<P: Borrow<common_types::TextVariables>> TextVariables<P> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.proto().variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.proto().variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.proto().variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proto().variables.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.proto()
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<P: BorrowMut<common_types::TextVariables>> TextVariables<P> {
    /// Sets `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.proto_mut().variables.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.proto_mut().variables.remove(name)
    }

    pub fn clear(&mut self) {
        self.proto_mut().variables.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TextVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, value) in iter {
            variables.insert(name, value);
        }
        variables
    }
}

#[cfg(test)]
mod tests {
    use super::{NetClass, TextVariables};
    use crate::proto::common::types as common_types;

    #[test]
    fn text_variables_behave_like_a_map() {
        let mut variables = TextVariables::new();
        assert!(variables.is_empty());
        assert_eq!(variables.insert("REV", "A"), None);
        assert_eq!(variables.insert("REV", "B"), Some("A".to_string()));
        variables.insert("AUTHOR", "me");

        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get("REV"), Some("B"));
        assert!(variables.contains("AUTHOR"));
        assert_eq!(variables.remove("AUTHOR"), Some("me".to_string()));
        assert!(!variables.contains("AUTHOR"));

        let mut entries: Vec<_> = variables.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("REV", "B")]);
    }

    #[test]
    fn borrowed_text_variables_edit_the_message() {
        let mut message = common_types::TextVariables::default();
        TextVariables::from_proto(&mut message).insert("BOARD", "main");
        assert_eq!(message.variables.get("BOARD").map(String::as_str), Some("main"));
    }

    #[test]
    fn text_variables_collect_from_pairs() {
        let variables: TextVariables = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get("B"), Some("2"));
    }

    #[test]
    fn net_class_reports_optional_rules() {
        let class = NetClass::from_proto(common_types::NetClass {
            name: "Power".to_string(),
            priority: 2,
            clearance: Some(common_types::Distance { value_nm: 200_000 }),
            track_width: None,
            board_color: None,
        });
        assert_eq!(class.name(), "Power");
        assert_eq!(class.priority(), 2);
        assert_eq!(class.clearance(), Some(200_000));
        assert_eq!(class.track_width(), None);
        assert!(class.board_color().is_none());
    }
}
