//! Fixed spoken announcements

use super::language::Language;

/// Announcements spoken at points of the work flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    WorkStarted,
    MachineStopped,
    StartedAgain,
    WorkFinished,
    AskFarmerName,
    AskAddress,
    BillSaved,
}

impl Phrase {
    pub const fn text(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::WorkStarted, Language::Telugu) => "పని మొదలైంది",
            (Self::WorkStarted, Language::English) => "Work started",
            (Self::MachineStopped, Language::Telugu) => "బండి ఆగింది",
            (Self::MachineStopped, Language::English) => "Machine stopped",
            (Self::StartedAgain, Language::Telugu) => "మళ్ళీ మొదలైంది",
            (Self::StartedAgain, Language::English) => "Started again",
            (Self::WorkFinished, Language::Telugu) => "పని పూర్తయింది",
            (Self::WorkFinished, Language::English) => "Work finished",
            (Self::AskFarmerName, Language::Telugu) => "రైతు పేరు చెప్పండి",
            (Self::AskFarmerName, Language::English) => "Say the farmer's name",
            (Self::AskAddress, Language::Telugu) => "చిరునామా చెప్పండి",
            (Self::AskAddress, Language::English) => "Say the address",
            (Self::BillSaved, Language::Telugu) => "బిల్లు సేవ్ అయింది",
            (Self::BillSaved, Language::English) => "Bill saved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_follow_language() {
        assert_eq!(Phrase::WorkStarted.text(Language::English), "Work started");
        assert_eq!(Phrase::MachineStopped.text(Language::Telugu), "బండి ఆగింది");
    }
}
