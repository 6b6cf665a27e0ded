use crate::registry::Session;

/// Who an outbound event is addressed to, relative to the connection that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Only the originating connection
    Sender,
    /// Everyone in the room except the originating connection
    RoomExceptSender,
    /// Everyone in the room, the originating connection included if still a member
    Room,
}

/// Resolves a destination to connection ids
///
/// `members` is the room snapshot taken from the registry. Recipients keep
/// the snapshot order.
pub fn select_recipients(
    destination: Destination,
    sender: &str,
    members: &[Session],
) -> Vec<String> {
    match destination {
        Destination::Sender => vec![sender.to_string()],
        Destination::RoomExceptSender => members
            .iter()
            .filter(|s| s.connection_id != sender)
            .map(|s| s.connection_id.clone())
            .collect(),
        Destination::Room => members.iter().map(|s| s.connection_id.clone()).collect(),
    }
}
