// SPDX-License-Identifier: MPL-2.0
/// Which tab, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    None,
    Tab(usize),
}

impl Selection {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Tab(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_selected(self, index: usize) -> bool {
        self == Self::Tab(index)
    }
}
