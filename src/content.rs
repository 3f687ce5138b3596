//! Static page content. Everything here is rendered verbatim; none of it
//! carries behavior beyond being mapped into markup.

use crate::components::icons::Icon;

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

// Nav label and the id of the section it scrolls to.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Services", "services"),
    ("Team", "team"),
    ("FAQ", "faq"),
];

pub const HERO_IMAGE_URL: &str =
    "https://i.pinimg.com/1200x/60/41/e7/6041e73b5114c7116fd8fe855a3689e6.jpg";
pub const ABOUT_IMAGE_URL: &str =
    "https://i.pinimg.com/736x/da/0c/09/da0c09a1b42e80d403a9d6613e195d5c.jpg";

pub const TRUSTED_BY: &[&str] = &[
    "Global Health",
    "Mindful Corp",
    "TechCare",
    "Wellness IO",
    "Balance Sheet",
    "Zenith",
    "Nova Care",
];

pub const MISSION_POINTS: &[&str] = &[
    "Compassion-first methodology",
    "Science-backed cognitive therapies",
    "Accessible from anywhere, anytime",
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Users,
        title: "Individual Therapy",
        blurb: "One-on-one sessions aimed at personal growth and healing.",
    },
    Service {
        icon: Icon::Heart,
        title: "Couples Counseling",
        blurb: "Navigate relationship dynamics with a neutral mediator.",
    },
    Service {
        icon: Icon::Shield,
        title: "Emergency Support",
        blurb: "Immediate resources when things feel overwhelming.",
    },
    Service {
        icon: Icon::Brain,
        title: "Psychiatry",
        blurb: "Medical medication management for chemical imbalances.",
    },
    Service {
        icon: Icon::Sparkles,
        title: "Group Workshops",
        blurb: "Learn coping mechanisms alongside peers.",
    },
    Service {
        icon: Icon::Play,
        title: "Digital Tools",
        blurb: "Access our library of meditations and journals.",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "The Assessment",
        blurb: "Take a 5-minute quiz to help us understand your needs, preferences, and goals.",
    },
    ProcessStep {
        number: "02",
        title: "The Match",
        blurb: "Our algorithm pairs you with 3 therapists who fit your profile. You choose the vibe.",
    },
    ProcessStep {
        number: "03",
        title: "The Session",
        blurb: "Meet via video, audio, or text. Whatever makes you feel most safe.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Sarah Jenkins",
        role: "Clinical Psychologist",
        photo: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=400",
    },
    TeamMember {
        name: "Marc Thompson",
        role: "Family Therapist",
        photo: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=400",
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "Mindfulness Coach",
        photo: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=400",
    },
];

// Index 0 is the entry that starts expanded.
pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is Raft covered by insurance?",
        answer: "Yes, we accept most major insurance providers including Aetna, Cigna, and BlueCross. We also offer sliding scale options.",
    },
    FaqEntry {
        question: "Can I switch therapists if it's not a match?",
        answer: "Absolutely. The relationship is key. If you don't click, you can switch instantly via your dashboard, no awkward conversations needed.",
    },
    FaqEntry {
        question: "Is my data 100% private?",
        answer: "We are fully HIPAA compliant. Your sessions are encrypted and never recorded without explicit consent.",
    },
    FaqEntry {
        question: "How long are the sessions?",
        answer: "Standard sessions are 50 minutes, but we also offer 30-minute check-ins and 90-minute intensive sessions.",
    },
];

pub const CONSULTATION_TOPICS: &[&str] = &[
    "I'm feeling anxious",
    "I'm feeling depressed",
    "I need relationship advice",
    "Just need to talk",
];

pub const CONTACT_EMAIL: &str = "hello@raft.health";
pub const CONTACT_PHONE: &str = "+1 (555) 252-1234";
pub const CONTACT_ADDRESS: &str = "123 Wellness Blvd, NY";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors_are_unique_lowercase_ids() {
        for (i, (label, id)) in NAV_SECTIONS.iter().enumerate() {
            assert!(!label.is_empty());
            assert!(!id.is_empty());
            assert_eq!(*id, id.to_lowercase());
            assert!(!id.contains(' '));
            for (other_label, other_id) in &NAV_SECTIONS[i + 1..] {
                assert_ne!(id, other_id, "{} and {} share an anchor", label, other_label);
            }
        }
    }

    #[test]
    fn test_service_grid_is_complete() {
        assert_eq!(SERVICES.len(), 6);
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.blurb.is_empty());
        }
    }

    #[test]
    fn test_process_steps_are_sequential() {
        let numbers: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }

    #[test]
    fn test_team_photos_are_absolute_urls() {
        assert_eq!(TEAM.len(), 3);
        for member in TEAM {
            assert!(member.photo.starts_with("https://"), "{}", member.name);
        }
    }

    #[test]
    fn test_faq_has_an_entry_for_the_default_expansion() {
        // The accordion starts with index 0 expanded, so the table must
        // never be empty.
        assert!(!FAQS.is_empty());
        assert_eq!(FAQS.len(), 4);
        for entry in FAQS {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn test_consultation_topics_present() {
        assert_eq!(CONSULTATION_TOPICS.len(), 4);
    }
}
