use crate::error::CheckError;
use async_trait::async_trait;
use orgguard_types::PolicyResult;

/// One organization policy.
///
/// Policies are stateless between calls; all repository state comes from collaborators,
/// so independent checks may run concurrently. Dropping a returned future cancels the
/// in-flight collaborator call.
#[async_trait]
pub trait Policy: Send + Sync {
    /// Policy-specific payload carried in [`PolicyResult::details`].
    type Details: Send;

    /// Stable display name.
    fn name(&self) -> &'static str;

    /// Evaluate the policy against `owner/repo`.
    async fn check(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<PolicyResult<Self::Details>, CheckError>;

    /// Apply the automatic remediation, if the policy has one.
    async fn fix(&self, owner: &str, repo: &str) -> Result<(), CheckError>;

    /// The effective remediation action for `owner/repo`.
    async fn get_action(&self, owner: &str, repo: &str) -> Result<String, CheckError>;
}
