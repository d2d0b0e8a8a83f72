// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a data-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A catalog entry wrapping another data-block.
    Asset,
    /// Mesh geometry.
    Mesh,
    /// A shading material.
    Material,
    /// A procedural or image-based texture.
    Texture,
    /// Pixel data.
    Image,
    /// A placed object with a transform.
    Object,
    /// A group of objects.
    Collection,
    /// A scene.
    Scene,
    /// Environment settings.
    World,
    /// A link to an external file.
    Library,
    /// A UI screen layout.
    Screen,
    /// The window manager.
    WindowManager,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [ObjectKind; 12] = [
        ObjectKind::Asset,
        ObjectKind::Mesh,
        ObjectKind::Material,
        ObjectKind::Texture,
        ObjectKind::Image,
        ObjectKind::Object,
        ObjectKind::Collection,
        ObjectKind::Scene,
        ObjectKind::World,
        ObjectKind::Library,
        ObjectKind::Screen,
        ObjectKind::WindowManager,
    ];

    /// Two-letter code identifying the kind.
    pub fn code(self) -> &'static str {
        match self {
            ObjectKind::Asset => "AS",
            ObjectKind::Mesh => "ME",
            ObjectKind::Material => "MA",
            ObjectKind::Texture => "TE",
            ObjectKind::Image => "IM",
            ObjectKind::Object => "OB",
            ObjectKind::Collection => "GR",
            ObjectKind::Scene => "SC",
            ObjectKind::World => "WO",
            ObjectKind::Library => "LI",
            ObjectKind::Screen => "SR",
            ObjectKind::WindowManager => "WM",
        }
    }

    /// Parses a two-letter code back into a kind.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Whether data-blocks of this kind can be duplicated.
    ///
    /// Libraries, screens and the window manager are session structures and
    /// have no meaningful copy.
    pub fn is_copyable(self) -> bool {
        !matches!(
            self,
            ObjectKind::Library | ObjectKind::Screen | ObjectKind::WindowManager
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ObjectKind::from_code("XX"), None);
    }

    #[test]
    fn session_kinds_are_not_copyable() {
        assert!(ObjectKind::Mesh.is_copyable());
        assert!(ObjectKind::Asset.is_copyable());
        assert!(!ObjectKind::Library.is_copyable());
        assert!(!ObjectKind::Screen.is_copyable());
        assert!(!ObjectKind::WindowManager.is_copyable());
    }
}
