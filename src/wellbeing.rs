//! Wellbeing reminders
//!
//! Each topic has one fixed reminder. Generation is a filter over the topic
//! table in its fixed order, so the output order never depends on the order
//! of flags in the request.

use crate::types::{WellbeingPrompts, WellbeingReminder, WellbeingTopic};

/// Static reminder definition for one topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicReminder {
    pub topic: WellbeingTopic,
    pub time: &'static str,
    pub prompt: &'static str,
    pub icon: &'static str,
}

/// Reminder table in output order: hydration, stretch, outdoor
pub const TOPIC_REMINDERS: [TopicReminder; 3] = [
    TopicReminder {
        topic: WellbeingTopic::Hydration,
        time: "10:00",
        prompt: "Stay hydrated! Drink a glass of water",
        icon: "💧",
    },
    TopicReminder {
        topic: WellbeingTopic::Stretch,
        time: "11:30",
        prompt: "Take a quick stretch break",
        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
    },
    TopicReminder {
        topic: WellbeingTopic::Outdoor,
        time: "15:00",
        prompt: "Get some fresh air and sunlight",
        icon: "🌞",
    },
];

impl TopicReminder {
    pub fn to_reminder(&self) -> WellbeingReminder {
        WellbeingReminder {
            time: self.time.to_string(),
            prompt: self.prompt.to_string(),
            icon: self.icon.to_string(),
            enabled: true,
        }
    }
}

/// Look up the fixed reminder for a topic
pub fn topic_reminder(topic: WellbeingTopic) -> &'static TopicReminder {
    match topic {
        WellbeingTopic::Hydration => &TOPIC_REMINDERS[0],
        WellbeingTopic::Stretch => &TOPIC_REMINDERS[1],
        WellbeingTopic::Outdoor => &TOPIC_REMINDERS[2],
    }
}

/// Build reminders for the enabled prompts. Disabled topics are omitted.
pub fn build_reminders(prompts: &WellbeingPrompts) -> Vec<WellbeingReminder> {
    TOPIC_REMINDERS
        .iter()
        .filter(|entry| prompts.is_enabled(entry.topic))
        .map(TopicReminder::to_reminder)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(hydration: bool, stretch: bool, outdoor: bool) -> WellbeingPrompts {
        WellbeingPrompts {
            hydration,
            stretch,
            outdoor,
        }
    }

    #[test]
    fn test_table_order_matches_topics() {
        let topics: Vec<WellbeingTopic> = TOPIC_REMINDERS.iter().map(|r| r.topic).collect();
        assert_eq!(topics, WellbeingTopic::ALL.to_vec());
    }

    #[test]
    fn test_all_enabled() {
        let reminders = build_reminders(&WellbeingPrompts::default());
        let times: Vec<&str> = reminders.iter().map(|r| r.time.as_str()).collect();

        assert_eq!(times, vec!["10:00", "11:30", "15:00"]);
        assert!(reminders.iter().all(|r| r.enabled));
    }

    #[test]
    fn test_none_enabled() {
        assert!(build_reminders(&WellbeingPrompts::none()).is_empty());
    }

    #[test]
    fn test_every_flag_combination() {
        for mask in 0u8..8 {
            let p = prompts(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let reminders = build_reminders(&p);

            let expected: Vec<WellbeingReminder> = WellbeingTopic::ALL
                .iter()
                .filter(|topic| p.is_enabled(**topic))
                .map(|topic| topic_reminder(*topic).to_reminder())
                .collect();

            assert_eq!(reminders.len(), p.enabled_count());
            assert_eq!(reminders, expected, "mask {:03b}", mask);
        }
    }

    #[test]
    fn test_stretch_and_outdoor_only() {
        let reminders = build_reminders(&prompts(false, true, true));

        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].prompt, "Take a quick stretch break");
        assert_eq!(reminders[1].prompt, "Get some fresh air and sunlight");
    }

    #[test]
    fn test_topic_lookup() {
        assert_eq!(topic_reminder(WellbeingTopic::Outdoor).time, "15:00");
        assert_eq!(topic_reminder(WellbeingTopic::Hydration).icon, "💧");
    }
}
