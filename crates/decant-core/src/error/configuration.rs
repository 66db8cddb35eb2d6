use crate::{Member, Type, Value};

/// Error raised when the member-matching rules for a mapping shape cannot
/// be satisfied.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    kind: ConfigurationErrorKind,
}

#[derive(Debug)]
enum ConfigurationErrorKind {
    /// A writable target member has no source counterpart under
    /// `AllTargetMembers` mode.
    UnmatchedTargetMember { target: String, ty: Type },

    /// A source/target pair with incompatible value types.
    IncompatibleMembers {
        source: String,
        source_ty: Type,
        target: String,
        target_ty: Type,
    },

    /// A constant override whose value does not fit the target member.
    InvalidConstant {
        target: String,
        target_ty: Type,
        value_ty: Type,
    },

    /// A mapping targets a member that cannot be written.
    NotWritable { member: String },

    /// A mapping reads a member that cannot be read.
    NotReadable { member: String },
}

impl ConfigurationError {
    pub(super) fn unmatched_target_member(target: &Member) -> Self {
        Self {
            kind: ConfigurationErrorKind::UnmatchedTargetMember {
                target: target.name.clone(),
                ty: target.ty.clone(),
            },
        }
    }

    pub(super) fn incompatible_members(source: &Member, target: &Member) -> Self {
        Self {
            kind: ConfigurationErrorKind::IncompatibleMembers {
                source: source.name.clone(),
                source_ty: source.ty.clone(),
                target: target.name.clone(),
                target_ty: target.ty.clone(),
            },
        }
    }

    pub(super) fn invalid_constant(target: &Member, value: &Value) -> Self {
        Self {
            kind: ConfigurationErrorKind::InvalidConstant {
                target: target.name.clone(),
                target_ty: target.ty.clone(),
                value_ty: value.ty(),
            },
        }
    }

    pub(super) fn member_not_writable(member: &Member) -> Self {
        Self {
            kind: ConfigurationErrorKind::NotWritable {
                member: member.name.clone(),
            },
        }
    }

    pub(super) fn member_not_readable(member: &Member) -> Self {
        Self {
            kind: ConfigurationErrorKind::NotReadable {
                member: member.name.clone(),
            },
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ConfigurationErrorKind::UnmatchedTargetMember { target, ty } => {
                write!(
                    f,
                    "target member `{target}: {ty}` has no matching source member"
                )
            }
            ConfigurationErrorKind::IncompatibleMembers {
                source,
                source_ty,
                target,
                target_ty,
            } => {
                write!(
                    f,
                    "source member `{source}: {source_ty}` is not assignable to \
                     target member `{target}: {target_ty}`"
                )
            }
            ConfigurationErrorKind::InvalidConstant {
                target,
                target_ty,
                value_ty,
            } => {
                write!(
                    f,
                    "constant of type {value_ty} is not assignable to \
                     target member `{target}: {target_ty}`"
                )
            }
            ConfigurationErrorKind::NotWritable { member } => {
                write!(f, "member `{member}` is not writable")
            }
            ConfigurationErrorKind::NotReadable { member } => {
                write!(f, "member `{member}` is not readable")
            }
        }
    }
}
