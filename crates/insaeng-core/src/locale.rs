//! Language toggling, UI strings, and the reminder rotation.

/// Display language. Starts in Chinese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    /// Toggle between the two supported languages.
    pub fn toggle(self) -> Self {
        match self {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        }
    }

    /// Map the web form's `language` field. Only the exact value
    /// `English` selects English; everything else is Chinese.
    pub fn from_form_value(value: &str) -> Self {
        if value == "English" {
            Language::English
        } else {
            Language::Chinese
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Language::Chinese => "人生周数提醒器",
            Language::English => "Life Weeks Reminder",
        }
    }

    pub fn birth_prompt(self) -> &'static str {
        match self {
            Language::Chinese => "请输入你的出生日期 (YYYY-MM-DD):",
            Language::English => "Please enter your birth date (YYYY-MM-DD):",
        }
    }

    pub fn invalid_date(self) -> &'static str {
        match self {
            Language::Chinese => "请输入有效的出生日期 (格式: YYYY-MM-DD)",
            Language::English => "Please enter a valid birth date (Format: YYYY-MM-DD)",
        }
    }

    /// The lived/remaining summary line.
    pub fn result_text(self, lived: i64, remaining: i64) -> String {
        match self {
            Language::Chinese => {
                format!("你已经度过了 {lived} 周，剩余大约 {remaining} 周。")
            }
            Language::English => {
                format!(
                    "You have lived {lived} weeks, approximately {remaining} weeks remaining."
                )
            }
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Language::Chinese => "提交",
            Language::English => "submit",
        }
    }

    pub fn home_label(self) -> &'static str {
        match self {
            Language::Chinese => "首页",
            Language::English => "home",
        }
    }

    pub fn language_label(self) -> &'static str {
        match self {
            Language::Chinese => "语言",
            Language::English => "language",
        }
    }

    pub fn font_label(self) -> &'static str {
        match self {
            Language::Chinese => "字号",
            Language::English => "font size",
        }
    }

    pub fn pause_label(self) -> &'static str {
        match self {
            Language::Chinese => "暂停提醒",
            Language::English => "pause",
        }
    }

    pub fn quit_label(self) -> &'static str {
        match self {
            Language::Chinese => "退出",
            Language::English => "quit",
        }
    }

    /// The fixed motivational reminder list for this language.
    pub fn reminders(self) -> &'static [&'static str] {
        match self {
            Language::Chinese => REMINDERS_CN,
            Language::English => REMINDERS_EN,
        }
    }
}

const REMINDERS_CN: &[&str] = &[
    "人生短暂，不要让拖延成为你的常态。",
    "每一周都是宝贵的，不要浪费时间拖延！",
    "现在的每一个决定，决定了未来的你。",
    "你可以选择拖延，也可以选择现在行动，做出改变。",
    "今天做的事，决定你明天的自由。",
    "未来属于那些今天行动的人，别让拖延阻挡你。",
    "拖延只能让时间流逝得更快。",
    "你看看还有多少周可以浪费？不要再拖延了！",
    "时间不会等待，抓住现在才能把握未来。",
    "别再拖延了，否则这些小格子只能越来越少了！",
    "时间在走，人生的进度条不会等你，赶快行动吧！",
    "如果你总是拖延，连这些格子都等不及了！",
    "今天的行动会改变你的明天，不要让拖延成为你前进的障碍。",
    "每周一个小进步，累积起来就是巨大的成就，别拖延哦！",
    "时间很快就溜走，珍惜每一周，让自己变得更好。",
];

const REMINDERS_EN: &[&str] = &[
    "Life is short, don’t let procrastination be your norm.",
    "Every week is precious, don't waste time procrastinating!",
    "Every decision you make today shapes your future.",
    "You can choose to procrastinate, or you can choose to act now and make a change.",
    "What you do today determines your freedom tomorrow.",
    "The future belongs to those who act today, don't let procrastination hold you back.",
    "Procrastination just makes time fly by faster.",
    "How many 88-year weeks do you have to waste? Don't procrastinate!",
    "Time doesn't wait, seize the moment to shape your future.",
    "Stop procrastinating, or these squares will keep getting fewer!",
    "Time is ticking, and the progress bar of life won't wait for you, take action now!",
    "If you keep procrastinating, even these squares can’t wait any longer!",
    "Today's actions will change your tomorrow, don't let procrastination be your barrier.",
    "A small improvement each week will accumulate to great achievements, don't procrastinate!",
    "Time slips away quickly, cherish each week, and make yourself better.",
];

/// Pick a reminder by seed, skipping `current` when another choice exists.
pub fn pick_reminder(language: Language, current: Option<&str>, seed: u64) -> &'static str {
    let pool = language.reminders();
    let candidates: Vec<&'static str> = pool
        .iter()
        .copied()
        .filter(|r| Some(*r) != current)
        .collect();
    match candidates.len() {
        0 => pool.first().copied().unwrap_or(""),
        n => candidates[(seed % n as u64) as usize],
    }
}

/// Text emphasis cycle standing in for the desktop font-size toggle;
/// terminals have exactly one glyph size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontScale {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontScale {
    /// Cycle small -> medium -> large -> small.
    pub fn next(self) -> Self {
        match self {
            FontScale::Small => FontScale::Medium,
            FontScale::Medium => FontScale::Large,
            FontScale::Large => FontScale::Small,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Language::Chinese.toggle(), Language::English);
        assert_eq!(Language::Chinese.toggle().toggle(), Language::Chinese);
    }

    #[test]
    fn form_value_maps_exact_english_only() {
        assert_eq!(Language::from_form_value("English"), Language::English);
        assert_eq!(Language::from_form_value("中文"), Language::Chinese);
        assert_eq!(Language::from_form_value("english"), Language::Chinese);
        assert_eq!(Language::from_form_value(""), Language::Chinese);
    }

    #[test]
    fn reminder_lists_are_full() {
        assert_eq!(Language::Chinese.reminders().len(), 15);
        assert_eq!(Language::English.reminders().len(), 15);
    }

    #[test]
    fn rotation_never_repeats_current() {
        let current = Language::English.reminders()[3];
        for seed in 0..100 {
            let next = pick_reminder(Language::English, Some(current), seed);
            assert_ne!(next, current);
        }
    }

    #[test]
    fn pick_is_deterministic_per_seed() {
        let a = pick_reminder(Language::Chinese, None, 42);
        let b = pick_reminder(Language::Chinese, None, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn font_scale_cycles() {
        assert_eq!(FontScale::Small.next(), FontScale::Medium);
        assert_eq!(FontScale::Medium.next(), FontScale::Large);
        assert_eq!(FontScale::Large.next(), FontScale::Small);
        assert_eq!(FontScale::default(), FontScale::Medium);
    }
}
