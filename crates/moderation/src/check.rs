//! The moderation verdict contract.

use async_trait::async_trait;

use crate::error::ModerationError;

/// Instruction prefix sent ahead of every request description. It asks the
/// model for the bare token `true` on approval so the reply can be matched
/// exactly; anything else is read as the reason for refusing.
pub const MODERATION_INSTRUCTIONS: &str = "Below is a request a user has asked \
a phone assistant to carry out on their behalf. We have the destination phone \
number and this set of instructions. Respond with only the word 'true' if the \
request is in no way harmful to complete and carries no legal implications in \
any US state. If you have any ethical or legal concern, respond with nothing \
more than your reason for considering the request invalid. Request follows: ";

/// Outcome of moderating a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The provider replied with exactly `true`.
    Approved,
    /// Any other reply; carries the provider's text as the rejection reason.
    Rejected(String),
}

impl Verdict {
    /// Parse a provider reply into a verdict.
    ///
    /// Approval requires the reply to be byte-identical to `"true"`: no
    /// trimming, no case folding. `"True"`, `"true."` and `"true\n"` all
    /// reject. Fragile against a chatty provider; the instruction prefix
    /// pins the reply to the bare token.
    pub fn from_reply(reply: String) -> Self {
        if reply == "true" {
            Verdict::Approved
        } else {
            Verdict::Rejected(reply)
        }
    }

    /// Whether this verdict approves the request.
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved)
    }
}

/// Something that can judge whether a call request is acceptable to act on.
///
/// The production implementation is [`crate::Moderator`]; tests substitute
/// stubs so handlers can be exercised without network access.
#[async_trait]
pub trait ModerationCheck: Send + Sync {
    /// Judge the given request description.
    async fn check_request(&self, description: &str) -> Result<Verdict, ModerationError>;
}
