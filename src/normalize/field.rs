/// Recognized semantic column names eligible for targeted normalization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Field {
    Name,
    Age,
    Dept,
    Salary,
    JoinDate,
}

impl Field {
    /// The fixed recognized set, in canonical order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Age,
        Field::Dept,
        Field::Salary,
        Field::JoinDate,
    ];

    /// Matches an already-normalized header against the fixed recognized set.
    ///
    /// Headers must go through [`normalize_header`] first, so `"  age "`,
    /// `"AGE"` and `"Age"` all resolve to the same field.
    pub fn parse(header: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == header)
    }

    /// Canonical header text for this field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Dept => "Dept",
            Field::Salary => "Salary",
            Field::JoinDate => "Join Date",
        }
    }
}

/// Trims surrounding whitespace and title-cases a column name.
/// Interior whitespace is preserved as-is.
pub fn normalize_header(name: &str) -> String {
    title_case(name.trim())
}

/// Title-cases every word: the first alphabetic character after a
/// non-alphabetic one is uppercased, the rest are lowercased.
pub(crate) fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;
    for character in text.chars() {
        if character.is_alphabetic() {
            if at_word_start {
                output.extend(character.to_uppercase());
            } else {
                output.extend(character.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(character);
            at_word_start = true;
        }
    }
    output
}
