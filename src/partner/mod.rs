//! Links between the household and the partners invited to share it.

mod accept_endpoint;
mod core;
mod delete_endpoint;
mod invite_endpoint;
mod list_endpoint;

pub use accept_endpoint::accept_invite_endpoint;
pub use core::{
    PartnerLink, PartnerStatus, accept_invite, invite_partner, list_partners, remove_partner,
};
pub use delete_endpoint::delete_partner_endpoint;
pub use invite_endpoint::invite_partner_endpoint;
pub use list_endpoint::list_partners_endpoint;
