// Play area clamp, the area edges act as implicit solid surfaces

use super::body::Body;
use super::config::PlayArea;

/// Which area edges the body was clamped against this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub floor: bool,
}

impl EdgeContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.floor
    }
}

/// Keep `body` inside `area`.
///
/// Runs after obstacle resolution so it has the final say on area edges.
pub fn clamp_to_area(body: &mut Body, area: &PlayArea) -> EdgeContacts {
    let size = body.size();
    let mut contacts = EdgeContacts::default();

    if body.position.x < 0.0 {
        body.position.x = 0.0;
        body.velocity.x = 0.0;
        contacts.left = true;
    }
    if body.position.x + size.x > area.width {
        body.position.x = area.width - size.x;
        body.velocity.x = 0.0;
        contacts.right = true;
    }

    if body.position.y < 0.0 {
        body.position.y = 0.0;
        body.velocity.y = 0.0;
        body.grounded = false;
        contacts.top = true;
    }
    if body.position.y + size.y > area.height {
        body.position.y = area.height - size.y;
        body.velocity.y = 0.0;
        body.grounded = true;
        contacts.floor = true;
    }

    contacts
}
