/// Two-state adjacency marker for one separator class
///
/// Armed when a token of its class closes, disarmed by the next examined
/// byte that does not belong to the class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Latch {
    armed: bool,
}

impl Latch {
    pub(super) fn arm(&mut self) {
        self.armed = true;
    }

    pub(super) fn disarm(&mut self) {
        self.armed = false;
    }

    pub(super) fn is_armed(self) -> bool {
        self.armed
    }
}
