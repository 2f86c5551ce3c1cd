use mockview_core::forms::{LoginDraft, OnboardingDraft, SignupDraft};
use mockview_core::guard::{GuardDecision, RedirectTarget, RouteRequirement, evaluate};
use mockview_core::model::{FontChoice, ProblemId, UserType};
use mockview_core::time::fixed_clock;
use services::{AppServices, ServicesConfig, SessionKey};

#[tokio::test]
async fn signup_onboarding_and_logout_drive_the_guard() {
    let services = AppServices::in_memory(fixed_clock(), ServicesConfig::instant());
    let auth = services.auth();

    let anonymous = auth.current().await.unwrap();
    assert_eq!(
        evaluate(RouteRequirement::Authenticated, &anonymous),
        GuardDecision::Redirect(RedirectTarget::Login)
    );

    let record = auth
        .signup(SignupDraft {
            name: "Katherine".into(),
            email: "katherine@example.com".into(),
            password: "orbital-mechanics".into(),
            confirm_password: "orbital-mechanics".into(),
            user_type: UserType::Candidate,
        })
        .await
        .unwrap();
    assert!(evaluate(RouteRequirement::Onboarding, &record).is_render());
    assert!(evaluate(RouteRequirement::Authenticated, &record).is_render());

    auth.complete_onboarding(OnboardingDraft {
        headline: "Numerical analyst".into(),
        ..OnboardingDraft::default()
    })
    .await
    .unwrap();
    let onboarded = auth.current().await.unwrap();
    assert_eq!(
        evaluate(RouteRequirement::Onboarding, &onboarded),
        GuardDecision::Redirect(RedirectTarget::Dashboard)
    );
    assert_eq!(
        evaluate(RouteRequirement::Interviewer, &onboarded),
        GuardDecision::Redirect(RedirectTarget::Dashboard)
    );

    auth.logout().await.unwrap();
    let after = auth.current().await.unwrap();
    assert!(!after.is_authenticated());
    assert_eq!(
        evaluate(RouteRequirement::Authenticated, &after),
        GuardDecision::Redirect(RedirectTarget::Login)
    );
}

#[tokio::test]
async fn logout_removes_preferences_and_history() {
    let services = AppServices::in_memory(fixed_clock(), ServicesConfig::instant());
    let store = services.session_store();

    services
        .auth()
        .login(LoginDraft {
            email: "ada@example.com".into(),
            password: "anything".into(),
        })
        .await
        .unwrap();
    store.set_font(FontChoice::Mono).await.unwrap();
    services
        .catalog()
        .record_attempt(ProblemId::new(1), "python", true)
        .await
        .unwrap();

    services.auth().logout().await.unwrap();

    assert_eq!(store.get(SessionKey::AccessToken).await.unwrap(), None);
    assert_eq!(store.font().await.unwrap(), FontChoice::System);
    assert!(
        store
            .problem_history(ProblemId::new(1))
            .await
            .unwrap()
            .attempts
            .is_empty()
    );
}

#[tokio::test]
async fn interviewer_role_switch_opens_interviewer_routes() {
    let services = AppServices::in_memory(fixed_clock(), ServicesConfig::instant());
    let auth = services.auth();
    auth.login(LoginDraft {
        email: "hiring@example.com".into(),
        password: "anything".into(),
    })
    .await
    .unwrap();

    let record = auth.set_user_type(UserType::Interviewer).await.unwrap();
    assert!(evaluate(RouteRequirement::Interviewer, &record).is_render());

    let record = auth.set_user_type(UserType::Candidate).await.unwrap();
    assert_eq!(
        services
            .session_store()
            .get(SessionKey::UserType)
            .await
            .unwrap(),
        None
    );
    assert!(!evaluate(RouteRequirement::Interviewer, &record).is_render());
}
