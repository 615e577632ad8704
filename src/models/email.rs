use derive_getters::Getters;
use derive_new::new;

/// A single outgoing mail. Built fresh per run and handed straight to the
/// mail provider client, never persisted.
#[derive(Clone, Debug, Getters, new)]
pub struct EmailMessage {
    to: String,
    from: String,
    subject: String,
    html: String,
}
