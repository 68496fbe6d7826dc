use serde::Deserialize;

use super::CfgParam;
use crate::model::entity::TaskEntry;

/// Per-task boolean parameter, switched on for the tasks whose name contains
/// one of `name_contains`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagRule {
    pub param: String,
    #[serde(default)]
    pub name_contains: Vec<String>,
}

impl FlagRule {
    /// Generator weights are only stored for the SM ggH and VBF signal samples
    pub fn lhe_weights() -> Self {
        Self {
            param: "LHEWeights".to_owned(),
            name_contains: vec![
                "GluGluToHToTauTau_M-125".to_owned(),
                "VBFHToTauTau_M-125".to_owned(),
            ],
        }
    }

    pub fn applies_to(&self, task: &TaskEntry) -> bool {
        self.name_contains.iter().any(|pattern| task.name.contains(pattern.as_str()))
    }

    pub fn param_for(&self, task: &TaskEntry) -> CfgParam {
        CfgParam::flag(self.param.as_str(), self.applies_to(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str) -> TaskEntry {
        TaskEntry::new(name, "/ds")
    }

    #[test]
    fn lhe_weights_on_signal_only() {
        let rule = FlagRule::lhe_weights();
        assert!(rule.applies_to(&task("GluGluToHToTauTau_M-125")));
        assert!(rule.applies_to(&task("VBFHToTauTau_M-125")));
        assert!(!rule.applies_to(&task("GluGluToHToTauTau_herwig_M-125")));
        assert!(!rule.applies_to(&task("VBFHToTauTau_M-120")));
        assert!(!rule.applies_to(&task("TT")));
    }

    #[test]
    fn substring_match_not_prefix() {
        // SUSY samples embed the SM name but not the mass point
        let rule = FlagRule::lhe_weights();
        assert!(!rule.applies_to(&task("SUSYGluGluToHToTauTau_M-120")));
        assert!(rule.applies_to(&task("SUSYGluGluToHToTauTau_M-1250")));
    }

    #[test]
    fn param_value() {
        let rule = FlagRule::lhe_weights();
        assert_eq!(rule.param_for(&task("VBFHToTauTau_M-125")).to_string(), "LHEWeights=True");
        assert_eq!(rule.param_for(&task("ZZTo4L")).to_string(), "LHEWeights=False");
    }

    #[test]
    fn empty_rule_is_always_false() {
        let rule = FlagRule {
            param: "doHT".to_owned(),
            name_contains: vec![],
        };
        assert_eq!(rule.param_for(&task("anything")).to_string(), "doHT=False");
    }
}
