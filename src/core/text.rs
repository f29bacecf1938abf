// Form text shaping and widget state: digit filtering, the CPF input mask,
// the account-kind switch and the custom dropdown.

/// Keep only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

const CPF_DIGITS: usize = 11;

/// CPF display mask: `000.000.000-00`, grouped progressively while typing
/// and capped at 11 digits. Non-digits in the input are dropped first, so
/// re-masking an already masked value is stable.
pub fn mask_cpf(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CPF_DIGITS)
        .collect();
    let d = digits.as_str();
    match d.len() {
        0..=3 => d.to_string(),
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// The two signup flows selectable on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    /// Pessoa física: individual account, identified by CPF.
    Individual,
    /// Pessoa jurídica: business account, identified by branch and account.
    Business,
}

impl AccountKind {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "pf" => Some(Self::Individual),
            "pj" => Some(Self::Business),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Individual => "pf",
            Self::Business => "pj",
        }
    }
}

/// Open/selection state for the custom select widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropdownState {
    open: bool,
    selected: Option<usize>,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Trigger click: flip open/closed. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Option click: record the choice and close the panel.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.open = false;
    }

    /// Click outside: close without changing the choice.
    pub fn close(&mut self) {
        self.open = false;
    }
}
