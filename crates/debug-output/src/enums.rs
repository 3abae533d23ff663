//! crates/debug-output/src/enums.rs
//! Message classification enums and their bidirectional mapping to GL values.

use std::fmt;

use crate::gl::{self, GLenum};

/// Common behaviour shared by the three classification dimensions.
///
/// Each dimension is a closed set with a compact index used to address the
/// filter tables, and a GL value used at the entry-point boundary.
pub trait Classification: Copy + Eq + fmt::Debug + 'static {
    /// Every value of the dimension in index order.
    const ALL: &'static [Self];

    /// Compact index in `0..ALL.len()`.
    fn index(self) -> usize;

    /// GL enumeration value.
    fn to_gl(self) -> GLenum;

    /// GL enumerant name, e.g. `GL_DEBUG_SOURCE_API`.
    fn name(self) -> &'static str;

    /// Maps a GL value back to the dimension, if it names one.
    fn from_gl(value: GLenum) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.to_gl() == value)
    }
}

/// Origin category of a debug message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// The graphics API implementation itself.
    Api,
    /// The window-system binding layer.
    WindowSystem,
    /// The shader compiler.
    ShaderCompiler,
    /// A third-party tool or library layered on the API.
    ThirdParty,
    /// The application.
    Application,
    /// Anything else.
    Other,
}

impl Source {
    /// Number of sources.
    pub const COUNT: usize = 6;

    /// Returns `true` for the sources whose IDs are chosen by clients.
    ///
    /// Only these may insert messages or push debug groups.
    #[must_use]
    pub const fn is_client(self) -> bool {
        matches!(self, Self::Application | Self::ThirdParty)
    }
}

impl Classification for Source {
    const ALL: &'static [Self] = &[
        Self::Api,
        Self::WindowSystem,
        Self::ShaderCompiler,
        Self::ThirdParty,
        Self::Application,
        Self::Other,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn to_gl(self) -> GLenum {
        match self {
            Self::Api => gl::GL_DEBUG_SOURCE_API,
            Self::WindowSystem => gl::GL_DEBUG_SOURCE_WINDOW_SYSTEM,
            Self::ShaderCompiler => gl::GL_DEBUG_SOURCE_SHADER_COMPILER,
            Self::ThirdParty => gl::GL_DEBUG_SOURCE_THIRD_PARTY,
            Self::Application => gl::GL_DEBUG_SOURCE_APPLICATION,
            Self::Other => gl::GL_DEBUG_SOURCE_OTHER,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Api => "GL_DEBUG_SOURCE_API",
            Self::WindowSystem => "GL_DEBUG_SOURCE_WINDOW_SYSTEM",
            Self::ShaderCompiler => "GL_DEBUG_SOURCE_SHADER_COMPILER",
            Self::ThirdParty => "GL_DEBUG_SOURCE_THIRD_PARTY",
            Self::Application => "GL_DEBUG_SOURCE_APPLICATION",
            Self::Other => "GL_DEBUG_SOURCE_OTHER",
        }
    }
}

/// Classification of a debug message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// An API error.
    Error,
    /// Use of deprecated behaviour.
    DeprecatedBehavior,
    /// Behaviour the API leaves undefined.
    UndefinedBehavior,
    /// Non-portable usage.
    Portability,
    /// A performance note.
    Performance,
    /// Anything else.
    Other,
    /// An annotation inserted by the client.
    Marker,
    /// Emitted when a debug group is entered.
    PushGroup,
    /// Emitted when a debug group is left.
    PopGroup,
}

impl MessageType {
    /// Number of message types.
    pub const COUNT: usize = 9;

    /// Returns `true` for the group bracketing types, which only the group
    /// stack may emit.
    #[must_use]
    pub const fn is_group_marker(self) -> bool {
        matches!(self, Self::PushGroup | Self::PopGroup)
    }
}

impl Classification for MessageType {
    const ALL: &'static [Self] = &[
        Self::Error,
        Self::DeprecatedBehavior,
        Self::UndefinedBehavior,
        Self::Portability,
        Self::Performance,
        Self::Other,
        Self::Marker,
        Self::PushGroup,
        Self::PopGroup,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn to_gl(self) -> GLenum {
        match self {
            Self::Error => gl::GL_DEBUG_TYPE_ERROR,
            Self::DeprecatedBehavior => gl::GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR,
            Self::UndefinedBehavior => gl::GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR,
            Self::Portability => gl::GL_DEBUG_TYPE_PORTABILITY,
            Self::Performance => gl::GL_DEBUG_TYPE_PERFORMANCE,
            Self::Other => gl::GL_DEBUG_TYPE_OTHER,
            Self::Marker => gl::GL_DEBUG_TYPE_MARKER,
            Self::PushGroup => gl::GL_DEBUG_TYPE_PUSH_GROUP,
            Self::PopGroup => gl::GL_DEBUG_TYPE_POP_GROUP,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Error => "GL_DEBUG_TYPE_ERROR",
            Self::DeprecatedBehavior => "GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR",
            Self::UndefinedBehavior => "GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR",
            Self::Portability => "GL_DEBUG_TYPE_PORTABILITY",
            Self::Performance => "GL_DEBUG_TYPE_PERFORMANCE",
            Self::Other => "GL_DEBUG_TYPE_OTHER",
            Self::Marker => "GL_DEBUG_TYPE_MARKER",
            Self::PushGroup => "GL_DEBUG_TYPE_PUSH_GROUP",
            Self::PopGroup => "GL_DEBUG_TYPE_POP_GROUP",
        }
    }
}

/// Urgency tier of a debug message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Minor issues and hints.
    Low,
    /// Significant performance or portability problems.
    Medium,
    /// Errors and undefined behaviour.
    High,
    /// Informational output, including group markers.
    Notification,
}

impl Severity {
    /// Number of severities.
    pub const COUNT: usize = 4;
}

impl Classification for Severity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Notification];

    fn index(self) -> usize {
        self as usize
    }

    fn to_gl(self) -> GLenum {
        match self {
            Self::Low => gl::GL_DEBUG_SEVERITY_LOW,
            Self::Medium => gl::GL_DEBUG_SEVERITY_MEDIUM,
            Self::High => gl::GL_DEBUG_SEVERITY_HIGH,
            Self::Notification => gl::GL_DEBUG_SEVERITY_NOTIFICATION,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Low => "GL_DEBUG_SEVERITY_LOW",
            Self::Medium => "GL_DEBUG_SEVERITY_MEDIUM",
            Self::High => "GL_DEBUG_SEVERITY_HIGH",
            Self::Notification => "GL_DEBUG_SEVERITY_NOTIFICATION",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )+
    };
}

display_by_name!(Source, MessageType, Severity);

/// A single classification value or the "don't care" wildcard.
///
/// The wildcard exists only at the control boundary; it is never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// Every value of the dimension.
    Any,
    /// Exactly one value.
    Only(T),
}

impl<T: Classification> Selector<T> {
    /// Maps a raw GL value, accepting `GL_DONT_CARE` as [`Selector::Any`].
    pub fn from_gl(value: GLenum) -> Option<Self> {
        if value == gl::GL_DONT_CARE {
            Some(Self::Any)
        } else {
            T::from_gl(value).map(Self::Only)
        }
    }

    /// Returns `true` for the wildcard.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Iterates over every value selected, in index order.
    pub fn values(self) -> impl Iterator<Item = T> {
        let all: &'static [T] = T::ALL;
        let slice = match self {
            Self::Any => all,
            Self::Only(value) => {
                let index = value.index();
                &all[index..=index]
            }
        };
        slice.iter().copied()
    }
}

impl<T> From<T> for Selector<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}
