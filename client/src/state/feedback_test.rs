use super::*;

#[test]
fn fail_replaces_success() {
    let mut feedback = Feedback::default();
    feedback.succeed("Résident ajouté avec succès !");
    feedback.fail("Erreur lors de l'ajout du résident");
    assert_eq!(feedback.error.as_deref(), Some("Erreur lors de l'ajout du résident"));
    assert_eq!(feedback.success, None);
}

#[test]
fn succeed_replaces_error() {
    let mut feedback = Feedback::default();
    feedback.fail("boom");
    feedback.succeed("ok");
    assert_eq!(feedback.error, None);
    assert_eq!(feedback.success.as_deref(), Some("ok"));
}

#[test]
fn dismiss_only_hides_error() {
    let mut feedback = Feedback { error: Some("x".to_owned()), success: Some("y".to_owned()) };
    feedback.dismiss();
    assert_eq!(feedback.error, None);
    assert_eq!(feedback.success.as_deref(), Some("y"));
    feedback.clear();
    assert_eq!(feedback, Feedback::default());
}
