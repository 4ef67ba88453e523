use crate::classifier::ClassLabel;
use crate::copy::result_copy;
use crate::domain::Language;

pub const WARNING_COLOR: &str = "#D9534F";
pub const ACCENT_COLOR: &str = "#36CFC9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBucket {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn bucket(class: ClassLabel, lang: Language) -> RiskBucket {
    let label = result_copy(lang).bankruptcy_status[usize::from(class.index())];
    let color = match class {
        ClassLabel::Bankrupt => WARNING_COLOR,
        ClassLabel::NotBankrupt => ACCENT_COLOR,
    };
    RiskBucket { label, color }
}
