//! The static data dictionary: label tables for the boolean `with_*` and
//! `do_*` flags, plus the fixed line-color palette.
//!
//! Injected once at startup and never mutated. Field names and labels follow
//! the published Mappiness data dictionary.

/// Label tables for the flag fields of a response.
#[derive(Debug, Clone, Copy)]
pub struct DataDictionary {
    /// `with_*` keys and their labels, in display order.
    pub people: &'static [(&'static str, &'static str)],
    /// `do_*` keys and their labels, in display order.
    pub activities: &'static [(&'static str, &'static str)],
}

impl DataDictionary {
    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        self.people
            .iter()
            .chain(self.activities.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    pub fn is_activity(&self, key: &str) -> bool {
        self.activities.iter().any(|(k, _)| *k == key)
    }

    /// Activity entries offered in the editor. The raw data carries both
    /// `do_other` and `do_other2`; the UI conflates them into one field.
    pub fn ui_activities(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.activities
            .iter()
            .copied()
            .filter(|(k, _)| *k != "do_other2")
    }
}

/// Shown in tooltips and keys when no `with_*` flag is set.
pub const ALONE_LABEL: &str = "Alone, or with strangers only";

/// Fixed color pool for lines. Its length is the maximum number of
/// simultaneously active lines.
pub const LINE_COLORS: [&str; 9] = [
    "#FAA43A", // orange
    "#60BD68", // green
    "#5DA5DA", // blue
    "#F17CB0", // pink
    "#B2912F", // brown
    "#B276B2", // purple
    "#DECF3F", // yellow
    "#F15854", // red
    "#4D4D4D", // gray
];

pub const DICTIONARY: DataDictionary = DataDictionary {
    people: &[
        ("with_partner", "Spouse, partner, girl/boyfriend"),
        ("with_children", "Children"),
        ("with_relatives", "Other family members"),
        ("with_peers", "Colleagues, classmates"),
        ("with_clients", "Clients, customers"),
        ("with_friends", "Friends"),
        ("with_others", "Other people you know"),
    ],
    activities: &[
        ("do_work", "Working, studying"),
        ("do_meet", "In a meeting, seminar, class"),
        ("do_travel", "Travelling, commuting"),
        ("do_cook", "Cooking, preparing food"),
        ("do_chores", "Housework, chores, DIY"),
        ("do_admin", "Admin, finances, organising"),
        ("do_shop", "Shopping, errands"),
        ("do_wait", "Waiting, queueing"),
        ("do_child", "Childcare, playing with children"),
        ("do_pet", "Pet care, playing with pets"),
        ("do_care", "Care or help for adults"),
        ("do_rest", "Sleeping, resting, relaxing"),
        ("do_sick", "Sick in bed"),
        ("do_pray", "Meditating, religious activities"),
        ("do_wash", "Washing, dressing, grooming"),
        ("do_love", "Intimacy, making love"),
        ("do_chat", "Talking, chatting, socialising"),
        ("do_eat", "Eating, snacking"),
        ("do_caffeine", "Drinking tea/coffee"),
        ("do_booze", "Drinking alcohol"),
        ("do_smoke", "Smoking"),
        ("do_msg", "Texting, email, social media"),
        ("do_net", "Browsing the Internet"),
        ("do_tv", "Watching TV, film"),
        ("do_music", "Listening to music"),
        ("do_speech", "Listening to speech/podcast"),
        ("do_read", "Reading"),
        ("do_theatre", "Theatre, dance, concert"),
        ("do_museum", "Exhibition, museum, library"),
        ("do_match", "Match, sporting event"),
        ("do_walk", "Walking, hiking"),
        ("do_sport", "Sports, running, exercise"),
        ("do_gardening", "Gardening, allotment"),
        ("do_birdwatch", "Birdwatching, nature watching"),
        ("do_hunt", "Hunting, fishing"),
        ("do_compgame", "Computer games, iPhone games"),
        ("do_game", "Other games, puzzles"),
        ("do_bet", "Gambling, betting"),
        ("do_art", "Hobbies, arts, crafts"),
        ("do_sing", "Singing, performing"),
        ("do_other", "Something else"),
        ("do_other2", "Something else"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_crosses_both_tables() {
        assert_eq!(DICTIONARY.label_for("with_friends"), Some("Friends"));
        assert_eq!(DICTIONARY.label_for("do_walk"), Some("Walking, hiking"));
        assert_eq!(DICTIONARY.label_for("do_teleport"), None);
    }

    #[test]
    fn ui_activities_conflates_other2() {
        assert!(DICTIONARY.is_activity("do_other2"));
        assert!(DICTIONARY.ui_activities().all(|(k, _)| k != "do_other2"));
        assert_eq!(
            DICTIONARY.ui_activities().count(),
            DICTIONARY.activities.len() - 1
        );
    }

    #[test]
    fn color_pool_has_nine_distinct_colors() {
        let mut colors = LINE_COLORS.to_vec();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 9);
    }
}
