//! Defines household partner links and the invite flow.
//!
//! A link moves from [PartnerStatus::Invited] to [PartnerStatus::Active] when
//! the invite is accepted, and can be removed from any state.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error, config::HouseholdContext, error::require, month::format_timestamp, store::DataStore,
};

/// Where a partner is in the invite flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    /// An invite has been sent but not accepted.
    Invited,
    /// The invite has been accepted but the partner is not active yet.
    ///
    /// Reserved for a two-step accept flow, nothing produces it at the moment.
    Accepted,
    /// The partner is a member of the household.
    Active,
}

/// An invitation for someone to join the household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerLink {
    /// The ID of the link.
    pub id: String,
    /// The email address the invite was sent to.
    pub email: String,
    /// The household the partner was invited to.
    pub household_id: String,
    /// Where the partner is in the invite flow.
    pub status: PartnerStatus,
    /// The ID of the user who sent the invite.
    pub invited_by: String,
    /// When the invite was sent as an RFC 3339 timestamp.
    pub invited_at: String,
    /// When the invite was last accepted as an RFC 3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
}

/// Get the partner links of the household in `household`.
///
/// # Errors
/// Returns [Error::LockPoisoned] if the store lock is poisoned.
pub fn list_partners(
    store: &DataStore,
    household: &HouseholdContext,
) -> Result<Vec<PartnerLink>, Error> {
    store.read(|collections| {
        collections
            .partners
            .iter()
            .filter(|partner| partner.household_id == household.household_id)
            .cloned()
            .collect()
    })
}

/// Invite `email` to the household in `household` at `now`.
///
/// The duplicate check and the insert happen under one write lock, so two
/// concurrent invites for the same email cannot both succeed.
///
/// # Errors
/// Returns:
/// - [Error::Validation] if `email` is empty,
/// - [Error::DuplicateInvite] if the household already has a link for
///   `email`, whatever its status,
/// - [Error::InvalidTimestamp] if `now` cannot be formatted,
/// - [Error::LockPoisoned] if the store lock is poisoned.
pub fn invite_partner(
    store: &DataStore,
    household: &HouseholdContext,
    email: &str,
    now: OffsetDateTime,
) -> Result<PartnerLink, Error> {
    require("email", email)?;
    let invited_at = format_timestamp(now)?;

    store.write(|collections| {
        let already_invited = collections.partners.iter().any(|partner| {
            partner.email == email && partner.household_id == household.household_id
        });

        if already_invited {
            return Err(Error::DuplicateInvite(email.to_owned()));
        }

        let partner = PartnerLink {
            id: store.next_id(),
            email: email.to_owned(),
            household_id: household.household_id.clone(),
            status: PartnerStatus::Invited,
            invited_by: household.user_id.clone(),
            invited_at,
            accepted_at: None,
        };

        collections.partners.push(partner.clone());

        Ok(partner)
    })
}

/// Mark the link with ID `id` as active, accepted at `now`.
///
/// Links in any state can be accepted. Accepting an active link again
/// refreshes its accepted time.
///
/// # Errors
/// Returns [Error::PartnerNotFound] if there is no link with the ID `id`,
/// [Error::InvalidTimestamp] if `now` cannot be formatted, or
/// [Error::LockPoisoned] if the store lock is poisoned.
pub fn accept_invite(
    store: &DataStore,
    id: &str,
    now: OffsetDateTime,
) -> Result<PartnerLink, Error> {
    let accepted_at = format_timestamp(now)?;

    store.write(|collections| {
        let partner = collections
            .partners
            .iter_mut()
            .find(|partner| partner.id == id)
            .ok_or(Error::PartnerNotFound)?;

        partner.status = PartnerStatus::Active;
        partner.accepted_at = Some(accepted_at);

        Ok(partner.clone())
    })
}

/// Remove the link with ID `id`.
///
/// # Errors
/// Returns [Error::PartnerNotFound] if there is no link with the ID `id`, or
/// [Error::LockPoisoned] if the store lock is poisoned.
pub fn remove_partner(store: &DataStore, id: &str) -> Result<PartnerLink, Error> {
    store.write(|collections| {
        let index = collections
            .partners
            .iter()
            .position(|partner| partner.id == id)
            .ok_or(Error::PartnerNotFound)?;

        Ok(collections.partners.remove(index))
    })
}
