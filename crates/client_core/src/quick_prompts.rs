#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_PROMPTS: &[QuickPrompt] = &[
    QuickPrompt {
        label: "Navbar",
        prompt: "Create a modern responsive navbar with a logo and navigation links",
    },
    QuickPrompt {
        label: "Hero section",
        prompt: "Create a hero section with a headline, subtitle and call-to-action button",
    },
    QuickPrompt {
        label: "Pricing cards",
        prompt: "Create three pricing cards with the middle plan highlighted",
    },
    QuickPrompt {
        label: "Login form",
        prompt: "Create a login form with email and password fields and a submit button",
    },
    QuickPrompt {
        label: "Footer",
        prompt: "Create a footer with social links and a copyright notice",
    },
];

pub fn quick_prompt(index: usize) -> Option<&'static QuickPrompt> {
    QUICK_PROMPTS.get(index)
}
