//! Access-control decision for client-side navigation.
//!
//! Every route declares a [`RouteRequirement`]; [`evaluate`] turns it and the
//! current [`SessionRecord`] into a render-or-redirect decision. No I/O.

use crate::model::{SessionRecord, UserType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteRequirement {
    /// Marketing pages and demos.
    Public,
    /// Login and signup; signed-in users are sent to their dashboard.
    Guest,
    /// Any signed-in user.
    Authenticated,
    /// The onboarding flow: signed in and onboarding still pending.
    Onboarding,
    /// Signed in as an interviewer.
    Interviewer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardDecision {
    Render,
    Redirect(RedirectTarget),
}

impl GuardDecision {
    #[must_use]
    pub fn is_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decide whether a route may render for the given session.
///
/// Authentication is checked before any stricter requirement, so a stray
/// onboarding or role flag on a signed-out session still ends at the login page.
#[must_use]
pub fn evaluate(requirement: RouteRequirement, session: &SessionRecord) -> GuardDecision {
    let authenticated = session.is_authenticated();
    match requirement {
        RouteRequirement::Public => GuardDecision::Render,
        RouteRequirement::Guest if authenticated => {
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        }
        RouteRequirement::Guest => GuardDecision::Render,
        RouteRequirement::Authenticated
        | RouteRequirement::Onboarding
        | RouteRequirement::Interviewer
            if !authenticated =>
        {
            GuardDecision::Redirect(RedirectTarget::Login)
        }
        RouteRequirement::Authenticated => GuardDecision::Render,
        RouteRequirement::Onboarding if !session.needs_onboarding => {
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        }
        RouteRequirement::Onboarding => GuardDecision::Render,
        RouteRequirement::Interviewer if session.user_type != UserType::Interviewer => {
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        }
        RouteRequirement::Interviewer => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATED: [RouteRequirement; 3] = [
        RouteRequirement::Authenticated,
        RouteRequirement::Onboarding,
        RouteRequirement::Interviewer,
    ];

    fn signed_in() -> SessionRecord {
        SessionRecord {
            access_token: Some("token".into()),
            ..SessionRecord::default()
        }
    }

    #[test]
    fn gated_routes_send_anonymous_sessions_to_login() {
        let variants = [
            SessionRecord::anonymous(),
            SessionRecord {
                needs_onboarding: true,
                ..SessionRecord::default()
            },
            SessionRecord {
                user_type: UserType::Interviewer,
                needs_onboarding: true,
                access_token: Some(String::new()),
                ..SessionRecord::default()
            },
        ];
        for session in &variants {
            for requirement in GATED {
                assert_eq!(
                    evaluate(requirement, session),
                    GuardDecision::Redirect(RedirectTarget::Login),
                    "{requirement:?} with {session:?}"
                );
            }
        }
    }

    #[test]
    fn onboarding_route_without_pending_onboarding_goes_to_dashboard() {
        let session = signed_in();
        assert_eq!(
            evaluate(RouteRequirement::Onboarding, &session),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );

        let pending = SessionRecord {
            needs_onboarding: true,
            ..signed_in()
        };
        assert!(evaluate(RouteRequirement::Onboarding, &pending).is_render());
    }

    #[test]
    fn guest_routes_bounce_signed_in_users() {
        assert_eq!(
            evaluate(RouteRequirement::Guest, &signed_in()),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
        assert!(evaluate(RouteRequirement::Guest, &SessionRecord::anonymous()).is_render());
    }

    #[test]
    fn interviewer_routes_require_the_role() {
        assert_eq!(
            evaluate(RouteRequirement::Interviewer, &signed_in()),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
        let interviewer = SessionRecord {
            user_type: UserType::Interviewer,
            ..signed_in()
        };
        assert!(evaluate(RouteRequirement::Interviewer, &interviewer).is_render());
    }

    #[test]
    fn public_routes_always_render() {
        assert!(evaluate(RouteRequirement::Public, &SessionRecord::anonymous()).is_render());
        assert!(evaluate(RouteRequirement::Public, &signed_in()).is_render());
    }
}
