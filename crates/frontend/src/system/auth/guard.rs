use leptos::prelude::*;

use super::session::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionOp {
    /// At least one required permission present.
    #[default]
    Any,
    /// Every required permission present.
    All,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionRequirement {
    pub permissions: Vec<String>,
    pub op: PermissionOp,
}

impl PermissionRequirement {
    pub fn any(permissions: &[&str]) -> Self {
        Self {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            op: PermissionOp::Any,
        }
    }

    pub fn all(permissions: &[&str]) -> Self {
        Self {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            op: PermissionOp::All,
        }
    }
}

/// Membership check against the session permission list. An empty
/// requirement always passes; permission semantics stay server-side.
pub fn check_permission(held: &[String], requirement: &PermissionRequirement) -> bool {
    if requirement.permissions.is_empty() {
        return true;
    }
    match requirement.op {
        PermissionOp::Any => requirement
            .permissions
            .iter()
            .any(|p| held.contains(p)),
        PermissionOp::All => requirement
            .permissions
            .iter()
            .all(|p| held.contains(p)),
    }
}

/// Gates its children behind an authenticated session.
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show when=move || session.is_authenticated() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Renders children only when the requirement passes; otherwise an
/// access notice.
#[component]
pub fn PermissionGuard(requirement: PermissionRequirement, children: ChildrenFn) -> impl IntoView {
    let session = use_auth();
    let requirement = StoredValue::new(requirement);

    view! {
        <Show
            when=move || {
                let held = session.permissions.get();
                requirement.with_value(|req| check_permission(&held, req))
            }
            fallback=|| {
                view! {
                    <div class="guard-notice">
                        "You do not have permission to view this page."
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn empty_requirement_always_passes() {
        assert!(check_permission(&held(&[]), &PermissionRequirement::default()));
        assert!(check_permission(
            &held(&["read-medicine"]),
            &PermissionRequirement::any(&[])
        ));
    }

    #[test]
    fn any_passes_on_intersection() {
        let requirement = PermissionRequirement::any(&["update-user", "delete-user"]);
        assert!(check_permission(&held(&["delete-user"]), &requirement));
        assert!(!check_permission(&held(&["read-medicine"]), &requirement));
        assert!(!check_permission(&held(&[]), &requirement));
    }

    #[test]
    fn all_requires_every_permission() {
        let requirement = PermissionRequirement::all(&["update-user", "delete-user"]);
        assert!(check_permission(
            &held(&["update-user", "delete-user", "read-medicine"]),
            &requirement
        ));
        assert!(!check_permission(&held(&["update-user"]), &requirement));
    }
}
