use serde::Serialize;

/// Contact details attached to an offer request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            company: None,
            phone: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = non_blank(company.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// What the user has picked so far.
///
/// Single-choice fields are `None` until chosen. Multi-choice codes keep the
/// order in which they were toggled on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub vehicle_id: Option<String>,
    pub color_code: Option<String>,
    pub upholstery_code: Option<String>,
    pub factory_options: Vec<String>,
    pub accessories: Vec<String>,
    pub special_agreement: String,
    pub customer: Customer,
}

impl Selection {
    /// The special agreement text as entered, or `None` when nothing but whitespace was entered.
    pub fn special_agreement(&self) -> Option<&str> {
        let text = self.special_agreement.as_str();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Adds `code` when absent, removes it when present. Returns whether it is now selected.
pub fn toggle(codes: &mut Vec<String>, code: &str) -> bool {
    if let Some(pos) = codes.iter().position(|c| c == code) {
        codes.remove(pos);
        false
    } else {
        codes.push(code.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut codes = vec!["O1".to_string()];

        assert!(toggle(&mut codes, "O2"));
        assert_eq!(codes, vec!["O1", "O2"]);

        assert!(!toggle(&mut codes, "O1"));
        assert_eq!(codes, vec!["O2"]);
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let original = vec!["A1".to_string(), "A2".to_string()];
        for code in ["A1", "A2", "A3"] {
            let mut codes = original.clone();
            toggle(&mut codes, code);
            toggle(&mut codes, code);
            let mut sorted = codes.clone();
            sorted.sort();
            assert_eq!(sorted, original, "double toggle of {code}");
        }
    }

    #[test]
    fn test_special_agreement_blank_is_none() {
        let mut selection = Selection::default();
        assert_eq!(selection.special_agreement(), None);

        selection.special_agreement = "   \n".to_string();
        assert_eq!(selection.special_agreement(), None);

        selection.special_agreement = " delivery in May ".to_string();
        assert_eq!(selection.special_agreement(), Some(" delivery in May "));
    }

    #[test]
    fn test_customer_optional_fields() {
        let customer = Customer::new("Erika", "Muster", "erika@example.com")
            .with_company("")
            .with_phone("+49 30 123");
        assert_eq!(customer.company, None);
        assert_eq!(customer.phone.as_deref(), Some("+49 30 123"));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["company"], serde_json::Value::Null);
    }
}
