use std::fmt;

/// The configurator's linear sequence of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Vehicle,
    ColorAndUpholstery,
    FactoryOptions,
    Accessories,
    SpecialAgreement,
    CustomerDetails,
    Submitted,
}

/// Progress of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Vehicle,
        Step::ColorAndUpholstery,
        Step::FactoryOptions,
        Step::Accessories,
        Step::SpecialAgreement,
        Step::CustomerDetails,
        Step::Submitted,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Vehicle => "Vehicle",
            Step::ColorAndUpholstery => "Color & upholstery",
            Step::FactoryOptions => "Factory options",
            Step::Accessories => "Accessories",
            Step::SpecialAgreement => "Special agreement",
            Step::CustomerDetails => "Customer details",
            Step::Submitted => "Thank you",
        }
    }

    /// The following step, or `None` at the terminal step.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at the first step.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Submitted
    }

    pub fn status(self, current: Step) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
