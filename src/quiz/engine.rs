use serde::Serialize;

/// Number of forward edges on the standard welcome → success path; the
/// progress bar is drawn as history depth over this.
const STANDARD_PATH_EDGES: usize = 8;

/// One screen of the diagnostic flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuizStep {
    Welcome,
    Mrr,
    Pain,
    Channels,
    Icp,
    Blocker,
    Pricing,
    InterviewOffer,
    EmailOptin,
    Success,
}

/// Everything the visitor has told us during one open modal. Lives only as
/// long as the modal does; a new session starts from `Default`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct QuizAnswers {
    pub mrr: String,
    pub pain_level: u8,
    pub failed_channels: Vec<String>,
    pub icp_clarity: String,
    pub blocker: String,
    pub pricing: String,
    pub email: String,
    pub name: String,
    pub booked: bool,
}

impl Default for QuizAnswers {
    fn default() -> Self {
        Self {
            mrr: String::new(),
            pain_level: 5,
            failed_channels: Vec::new(),
            icp_clarity: String::new(),
            blocker: String::new(),
            pricing: String::new(),
            email: String::new(),
            name: String::new(),
            booked: false,
        }
    }
}

/// Every interaction the renderer can feed into a session. Selection steps
/// record their answer and advance in the same action; `Set*` actions only
/// mutate the answer record and never move the step pointer.
#[derive(Clone, PartialEq, Debug)]
pub enum QuizAction {
    Start,
    PickMrr(String),
    SetPainLevel(u8),
    PainNext,
    ToggleChannel(String),
    ChannelsNext,
    PickIcp(String),
    SetBlocker(String),
    BlockerNext,
    PickPricing(String),
    OfferReply { booked: bool },
    SetName(String),
    SetEmail(String),
    SubmitEmail,
    SkipEmail,
    Back,
}

/// State for one open quiz modal: the active step, the accumulated answers
/// and the back-navigation stack. All mutation goes through the methods
/// here; the renderer only reads.
#[derive(Clone, PartialEq, Debug)]
pub struct QuizSession {
    step: QuizStep,
    answers: QuizAnswers,
    history: Vec<QuizStep>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Welcome,
            answers: QuizAnswers::default(),
            history: Vec::new(),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Completion fraction for the progress bar, derived from navigation
    /// depth so it stays consistent with back navigation.
    pub fn progress(&self) -> f64 {
        (self.history.len() as f64 / STANDARD_PATH_EDGES as f64).min(1.0)
    }

    /// Success-screen variant: high pain plus an accepted call offer gets
    /// the "see you on the call" message.
    pub fn high_intent(&self) -> bool {
        self.answers.pain_level >= 7 && self.answers.booked
    }

    /// Moves forward to `target`, remembering the current step for back
    /// navigation. Callers only request targets reachable from the current
    /// step; the step graph is not re-checked here.
    pub fn advance(&mut self, target: QuizStep) {
        self.history.push(self.step);
        self.step = target;
    }

    /// Returns to the previously visited step. Answers recorded since then
    /// are kept. Silent no-op when there is nothing to go back to.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.history.pop() {
            self.step = prev;
        }
    }

    pub fn set_mrr(&mut self, value: String) {
        self.answers.mrr = value;
    }

    pub fn set_pain_level(&mut self, value: u8) {
        self.answers.pain_level = value;
    }

    /// Symmetric membership toggle: present values are removed, absent ones
    /// appended, so first-insertion order is what the list displays in.
    pub fn toggle_channel(&mut self, value: &str) {
        if let Some(pos) = self.answers.failed_channels.iter().position(|c| c == value) {
            self.answers.failed_channels.remove(pos);
        } else {
            self.answers.failed_channels.push(value.to_string());
        }
    }

    pub fn set_icp_clarity(&mut self, value: String) {
        self.answers.icp_clarity = value;
    }

    pub fn set_blocker(&mut self, value: String) {
        self.answers.blocker = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.answers.email = value;
    }

    pub fn set_name(&mut self, value: String) {
        self.answers.name = value;
    }

    pub fn set_pricing(&mut self, value: String) {
        self.answers.pricing = value;
    }

    pub fn set_booked(&mut self, value: bool) {
        self.answers.booked = value;
    }

    /// Where the pricing step leads: visitors reporting pain 7+ get the
    /// interview offer, everyone else goes straight to the email opt-in.
    fn pricing_destination(&self) -> QuizStep {
        if self.answers.pain_level >= 7 {
            QuizStep::InterviewOffer
        } else {
            QuizStep::EmailOptin
        }
    }

    /// The transition table: (current step, action) → side effect + next
    /// step. Returns whether the session changed. Actions that are not
    /// legal at the current step, and `SubmitEmail` with an empty email,
    /// are refused without touching any state.
    pub fn apply(&mut self, action: QuizAction) -> bool {
        use QuizAction as A;
        use QuizStep as S;

        match (self.step, action) {
            (_, A::Back) => {
                if self.history.is_empty() || self.step == S::Success {
                    false
                } else {
                    self.go_back();
                    true
                }
            }
            (S::Welcome, A::Start) => {
                self.advance(S::Mrr);
                true
            }
            (S::Mrr, A::PickMrr(bracket)) => {
                self.set_mrr(bracket);
                self.advance(S::Pain);
                true
            }
            (S::Pain, A::SetPainLevel(level)) => {
                self.set_pain_level(level);
                true
            }
            (S::Pain, A::PainNext) => {
                self.advance(S::Channels);
                true
            }
            (S::Channels, A::ToggleChannel(channel)) => {
                self.toggle_channel(&channel);
                true
            }
            (S::Channels, A::ChannelsNext) => {
                self.advance(S::Icp);
                true
            }
            (S::Icp, A::PickIcp(clarity)) => {
                self.set_icp_clarity(clarity);
                self.advance(S::Blocker);
                true
            }
            (S::Blocker, A::SetBlocker(text)) => {
                self.set_blocker(text);
                true
            }
            (S::Blocker, A::BlockerNext) => {
                self.advance(S::Pricing);
                true
            }
            (S::Pricing, A::PickPricing(bracket)) => {
                self.set_pricing(bracket);
                let next = self.pricing_destination();
                self.advance(next);
                true
            }
            (S::InterviewOffer, A::OfferReply { booked }) => {
                self.set_booked(booked);
                self.advance(S::EmailOptin);
                true
            }
            (S::EmailOptin, A::SetName(name)) => {
                self.set_name(name);
                true
            }
            (S::EmailOptin, A::SetEmail(email)) => {
                self.set_email(email);
                true
            }
            (S::EmailOptin, A::SubmitEmail) => {
                if self.answers.email.is_empty() {
                    false
                } else {
                    self.advance(S::Success);
                    true
                }
            }
            (S::EmailOptin, A::SkipEmail) => {
                self.advance(S::Success);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at_pain(pain: u8) -> QuizSession {
        let mut s = QuizSession::new();
        assert!(s.apply(QuizAction::Start));
        assert!(s.apply(QuizAction::PickMrr("$5K–$25K".into())));
        assert!(s.apply(QuizAction::SetPainLevel(pain)));
        assert!(s.apply(QuizAction::PainNext));
        s
    }

    fn drive_to_pricing(pain: u8) -> QuizSession {
        let mut s = session_at_pain(pain);
        assert!(s.apply(QuizAction::ChannelsNext));
        assert!(s.apply(QuizAction::PickIcp("Fuzzy".into())));
        assert!(s.apply(QuizAction::BlockerNext));
        assert_eq!(s.step(), QuizStep::Pricing);
        s
    }

    #[test]
    fn fresh_session_has_defaults() {
        let s = QuizSession::new();
        assert_eq!(s.step(), QuizStep::Welcome);
        assert_eq!(s.history_len(), 0);
        let a = s.answers();
        assert_eq!(a.mrr, "");
        assert_eq!(a.pain_level, 5);
        assert!(a.failed_channels.is_empty());
        assert_eq!(a.icp_clarity, "");
        assert_eq!(a.blocker, "");
        assert_eq!(a.pricing, "");
        assert_eq!(a.email, "");
        assert_eq!(a.name, "");
        assert!(!a.booked);
    }

    #[test]
    fn reopening_discards_prior_session() {
        let mut s = drive_to_pricing(9);
        s.apply(QuizAction::PickPricing("$10K+".into()));
        s.apply(QuizAction::OfferReply { booked: true });
        // a new modal open constructs a new session
        s = QuizSession::new();
        assert_eq!(s.step(), QuizStep::Welcome);
        assert_eq!(s.history_len(), 0);
        assert_eq!(*s.answers(), QuizAnswers::default());
    }

    #[test]
    fn history_grows_one_per_forward_transition() {
        let mut s = QuizSession::new();
        s.advance(QuizStep::Mrr);
        s.advance(QuizStep::Pain);
        s.advance(QuizStep::Channels);
        assert_eq!(s.history_len(), 3);
    }

    #[test]
    fn go_back_restores_previous_step_and_shrinks_history() {
        let mut s = QuizSession::new();
        s.apply(QuizAction::Start);
        s.apply(QuizAction::PickMrr("$1K–$5K".into()));
        assert_eq!(s.step(), QuizStep::Pain);
        assert_eq!(s.history_len(), 2);

        s.go_back();
        assert_eq!(s.step(), QuizStep::Mrr);
        assert_eq!(s.history_len(), 1);
        // answers recorded before going back are kept
        assert_eq!(s.answers().mrr, "$1K–$5K");
    }

    #[test]
    fn go_back_on_empty_history_is_a_no_op() {
        let mut s = QuizSession::new();
        let before = s.clone();
        s.go_back();
        assert_eq!(s, before);
        assert!(!s.apply(QuizAction::Back));
        assert_eq!(s, before);
    }

    #[test]
    fn channel_toggle_is_an_involution() {
        let mut s = session_at_pain(5);
        s.apply(QuizAction::ToggleChannel("Cold email".into()));
        s.apply(QuizAction::ToggleChannel("Paid ads".into()));
        let snapshot = s.answers().failed_channels.clone();

        s.apply(QuizAction::ToggleChannel("Cold email".into()));
        s.apply(QuizAction::ToggleChannel("Cold email".into()));
        assert_eq!(s.answers().failed_channels, snapshot);
    }

    #[test]
    fn channel_toggle_removes_present_values() {
        let mut s = session_at_pain(5);
        s.apply(QuizAction::ToggleChannel("LinkedIn outreach".into()));
        s.apply(QuizAction::ToggleChannel("LinkedIn outreach".into()));
        assert!(s.answers().failed_channels.is_empty());
    }

    #[test]
    fn channels_preserve_insertion_order_without_duplicates() {
        let mut s = session_at_pain(5);
        for c in ["Paid ads", "Cold email", "Paid ads", "Paid ads"] {
            s.apply(QuizAction::ToggleChannel(c.into()));
        }
        assert_eq!(s.answers().failed_channels, vec!["Cold email", "Paid ads"]);
    }

    #[test]
    fn zero_channel_selections_still_advance() {
        let mut s = session_at_pain(5);
        assert!(s.apply(QuizAction::ChannelsNext));
        assert_eq!(s.step(), QuizStep::Icp);
    }

    #[test]
    fn pricing_branches_on_pain_threshold() {
        let mut low = drive_to_pricing(6);
        low.apply(QuizAction::PickPricing("Under $2K".into()));
        assert_eq!(low.step(), QuizStep::EmailOptin);

        let mut boundary = drive_to_pricing(7);
        boundary.apply(QuizAction::PickPricing("Under $2K".into()));
        assert_eq!(boundary.step(), QuizStep::InterviewOffer);

        let mut high = drive_to_pricing(10);
        high.apply(QuizAction::PickPricing("Under $2K".into()));
        assert_eq!(high.step(), QuizStep::InterviewOffer);
    }

    #[test]
    fn scenario_mrr_selection_records_and_advances() {
        let mut s = QuizSession::new();
        assert!(s.apply(QuizAction::Start));
        assert!(s.apply(QuizAction::PickMrr("$5K–$25K".into())));
        assert_eq!(s.step(), QuizStep::Pain);
        assert_eq!(s.answers().mrr, "$5K–$25K");
    }

    #[test]
    fn scenario_high_pain_gets_offer_and_books() {
        let mut s = session_at_pain(8);
        s.apply(QuizAction::ToggleChannel("Cold email".into()));
        s.apply(QuizAction::ToggleChannel("Paid ads".into()));
        s.apply(QuizAction::ChannelsNext);
        s.apply(QuizAction::PickIcp("Fuzzy".into()));
        s.apply(QuizAction::SetBlocker("no leads".into()));
        s.apply(QuizAction::BlockerNext);
        s.apply(QuizAction::PickPricing("$5K–$10K".into()));
        assert_eq!(s.step(), QuizStep::InterviewOffer);

        s.apply(QuizAction::OfferReply { booked: true });
        assert_eq!(s.step(), QuizStep::EmailOptin);
        assert!(s.answers().booked);
    }

    #[test]
    fn scenario_low_pain_skips_offer() {
        let mut s = session_at_pain(3);
        s.apply(QuizAction::ToggleChannel("Cold email".into()));
        s.apply(QuizAction::ToggleChannel("Paid ads".into()));
        s.apply(QuizAction::ChannelsNext);
        s.apply(QuizAction::PickIcp("Fuzzy".into()));
        s.apply(QuizAction::SetBlocker("no leads".into()));
        s.apply(QuizAction::BlockerNext);
        s.apply(QuizAction::PickPricing("$5K–$10K".into()));
        assert_eq!(s.step(), QuizStep::EmailOptin);
        assert!(!s.answers().booked);
    }

    #[test]
    fn declining_the_offer_still_reaches_optin() {
        let mut s = drive_to_pricing(9);
        s.apply(QuizAction::PickPricing("$2K–$5K".into()));
        s.apply(QuizAction::OfferReply { booked: false });
        assert_eq!(s.step(), QuizStep::EmailOptin);
        assert!(!s.answers().booked);
    }

    #[test]
    fn empty_email_blocks_send_but_not_skip() {
        let mut s = drive_to_pricing(4);
        s.apply(QuizAction::PickPricing("Under $2K".into()));
        assert_eq!(s.step(), QuizStep::EmailOptin);

        let before = s.clone();
        assert!(!s.apply(QuizAction::SubmitEmail));
        assert_eq!(s, before);

        assert!(s.apply(QuizAction::SkipEmail));
        assert_eq!(s.step(), QuizStep::Success);
        assert_eq!(s.answers().email, "");
    }

    #[test]
    fn non_empty_email_submits() {
        let mut s = drive_to_pricing(4);
        s.apply(QuizAction::PickPricing("Under $2K".into()));
        s.apply(QuizAction::SetName("Ada".into()));
        s.apply(QuizAction::SetEmail("ada@example.com".into()));
        assert!(s.apply(QuizAction::SubmitEmail));
        assert_eq!(s.step(), QuizStep::Success);
    }

    #[test]
    fn success_is_terminal() {
        let mut s = drive_to_pricing(4);
        s.apply(QuizAction::PickPricing("Under $2K".into()));
        s.apply(QuizAction::SkipEmail);
        let before = s.clone();
        assert!(!s.apply(QuizAction::Start));
        assert!(!s.apply(QuizAction::SubmitEmail));
        assert!(!s.apply(QuizAction::Back));
        assert_eq!(s, before);
    }

    #[test]
    fn actions_at_the_wrong_step_are_refused() {
        let mut s = QuizSession::new();
        let before = s.clone();
        assert!(!s.apply(QuizAction::PickMrr("$50K+".into())));
        assert!(!s.apply(QuizAction::SubmitEmail));
        assert!(!s.apply(QuizAction::OfferReply { booked: true }));
        assert_eq!(s, before);
    }

    #[test]
    fn pain_level_can_be_adjusted_repeatedly_before_advancing() {
        let mut s = session_at_pain(5);
        s.go_back();
        assert_eq!(s.step(), QuizStep::Pain);
        for level in [1, 10, 4] {
            assert!(s.apply(QuizAction::SetPainLevel(level)));
        }
        assert_eq!(s.answers().pain_level, 4);
        assert!(s.apply(QuizAction::PainNext));
        assert_eq!(s.step(), QuizStep::Channels);
    }

    #[test]
    fn progress_tracks_history_depth() {
        let mut s = QuizSession::new();
        assert_eq!(s.progress(), 0.0);
        s.apply(QuizAction::Start);
        assert_eq!(s.progress(), 1.0 / 8.0);
        s.apply(QuizAction::PickMrr("$1K–$5K".into()));
        assert_eq!(s.progress(), 2.0 / 8.0);
        s.apply(QuizAction::Back);
        assert_eq!(s.progress(), 1.0 / 8.0);
    }

    #[test]
    fn high_intent_requires_pain_and_booking() {
        let mut s = QuizSession::new();
        assert!(!s.high_intent());
        s.set_pain_level(8);
        assert!(!s.high_intent());
        s.set_booked(true);
        assert!(s.high_intent());
        s.set_pain_level(6);
        assert!(!s.high_intent());
    }

    #[test]
    fn back_does_not_roll_back_answers() {
        let mut s = drive_to_pricing(9);
        s.apply(QuizAction::PickPricing("$10K+".into()));
        assert_eq!(s.step(), QuizStep::InterviewOffer);
        s.apply(QuizAction::Back);
        assert_eq!(s.step(), QuizStep::Pricing);
        assert_eq!(s.answers().pricing, "$10K+");
        assert_eq!(s.answers().pain_level, 9);
    }
}
