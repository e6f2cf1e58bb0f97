#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FlagMessage,
    BanUser,
    SuspendUser,
    IgnoreFlag,
    DeleteFlaggedMessage,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::FlagMessage,
        Action::BanUser,
        Action::SuspendUser,
        Action::IgnoreFlag,
        Action::DeleteFlaggedMessage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlagMessage => "flag_message",
            Self::BanUser => "ban_user",
            Self::SuspendUser => "suspend_user",
            Self::IgnoreFlag => "ignore_flag",
            Self::DeleteFlaggedMessage => "delete_flagged_message",
        }
    }

    pub fn path_prefix(self) -> &'static [&'static str] {
        match self {
            Self::FlagMessage => &["flag_message"],
            Self::BanUser => &["admin", "ban_user"],
            Self::SuspendUser => &["admin", "suspend_user"],
            Self::IgnoreFlag => &["admin", "ignore_flag"],
            Self::DeleteFlaggedMessage => &["admin", "delete_flagged_message"],
        }
    }

    pub fn path_segments(self, id: &str) -> Vec<&str> {
        let mut segments = self.path_prefix().to_vec();
        segments.push(id);
        segments
    }

    pub fn confirmation(self) -> Option<&'static str> {
        match self {
            Self::FlagMessage => None,
            Self::BanUser => Some("Are you sure you want to ban this user?"),
            Self::SuspendUser => Some("Are you sure you want to suspend this user?"),
            Self::IgnoreFlag => Some("Ignore this flagged message?"),
            Self::DeleteFlaggedMessage => Some("Delete this flagged message?"),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::FlagMessage => "Message flagged for admin review.",
            Self::BanUser => "User has been banned.",
            Self::SuspendUser => "User has been suspended.",
            Self::IgnoreFlag => "Flag ignored.",
            Self::DeleteFlaggedMessage => "Flagged message deleted.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::FlagMessage => "Error flagging message.",
            Self::BanUser => "Failed to ban user.",
            Self::SuspendUser => "Failed to suspend user.",
            Self::IgnoreFlag => "Failed to ignore flag.",
            Self::DeleteFlaggedMessage => "Failed to delete flagged message.",
        }
    }

    pub fn reloads_on_success(self) -> bool {
        self.is_admin()
    }

    pub fn is_admin(self) -> bool {
        !matches!(self, Self::FlagMessage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Confirmation declined; no request was sent.
    Cancelled,
    Succeeded { reloaded: bool },
    Rejected { status: u16 },
    Unreachable,
}

impl DispatchOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
