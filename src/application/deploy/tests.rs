//! Deploy Use Case Tests

use super::*;
use crate::application::test_support::*;
use crate::config::Config;
use crate::domain::entities::DeployOutcome;
use crate::domain::ports::{CommandOutput, DeployEvent};
use crate::domain::value_objects::Platform;
use tempfile::tempdir;

struct Harness {
    runner: ScriptedRunner,
    prompter: ScriptedPrompter,
    billing: FakeBilling,
    sink: RecordingSink,
    config: Config,
    dir: tempfile::TempDir,
}

impl Harness {
    fn new(runner: ScriptedRunner, prompter: ScriptedPrompter) -> Self {
        Self {
            runner,
            prompter,
            billing: FakeBilling::default(),
            sink: RecordingSink::default(),
            config: Config::default(),
            dir: tempdir().unwrap(),
        }
    }

    fn use_case(&self) -> DeployUseCase<'_> {
        DeployUseCase::new(
            &self.runner,
            &self.prompter,
            &self.billing,
            &self.sink,
            &self.config,
            self.dir.path(),
        )
    }
}

#[test]
fn unsupported_platform_does_nothing_else() {
    let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new());

    let report = h.use_case().deploy("netlify").unwrap();

    assert_eq!(report, DeployReport::Unsupported);
    assert!(h.runner.commands().is_empty());
    assert!(h.prompter.asked.borrow().is_empty());
    assert_eq!(
        *h.sink.events.borrow(),
        vec![DeployEvent::UnsupportedPlatform {
            name: "netlify".into(),
            supported: "vercel, heroku, railway, render".into(),
        }]
    );
}

#[test]
fn platform_name_is_case_insensitive() {
    let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new());

    let report = h.use_case().deploy("  Render ").unwrap();

    assert_eq!(report.platform(), Some(Platform::Render));
    assert!(h.dir.path().join("render.yaml").exists());
}

#[test]
fn each_platform_runs_only_its_own_commands() {
    for platform in Platform::ALL {
        let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new());

        h.use_case().deploy(platform.name()).unwrap();

        let programs: Vec<String> = h
            .runner
            .calls
            .borrow()
            .iter()
            .map(|c| c.program.clone())
            .collect();
        for other in Platform::ALL.iter().filter(|p| **p != platform) {
            assert!(
                !programs.iter().any(|p| p == other.name()),
                "{} ran {} commands: {:?}",
                platform.name(),
                other.name(),
                programs
            );
        }
        assert_eq!(
            h.sink.events.borrow()[0],
            DeployEvent::Started { platform }
        );
    }
}

#[test]
fn stripe_question_defaults_to_no() {
    let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new());

    h.use_case().deploy("render").unwrap();

    assert_eq!(h.prompter.asked.borrow()[0], "Set up Stripe products?");
    assert!(h.billing.calls.borrow().is_empty());
    assert!(h.billing.keys.borrow().is_empty());
}

#[test]
fn billing_runs_before_routine_when_confirmed() {
    let h = Harness::new(
        ScriptedRunner::new(),
        ScriptedPrompter::new()
            .confirms(&[true])
            .answers([" sk_test_123 "]),
    );

    h.use_case().deploy("render").unwrap();

    assert_eq!(*h.billing.keys.borrow(), vec!["sk_test_123"]);
    assert_eq!(h.billing.calls.borrow().len(), 6);
    assert_eq!(h.billing.calls.borrow()[1], "price obj_1 2999 usd month");

    let events = h.sink.events.borrow();
    let billing = events
        .iter()
        .position(|e| matches!(e, DeployEvent::BillingConfigured { .. }))
        .unwrap();
    let written = events
        .iter()
        .position(|e| matches!(e, DeployEvent::FileWritten { .. }))
        .unwrap();
    assert!(billing < written);
}

#[test]
fn billing_error_halts_but_deploy_continues() {
    let mut h = Harness::new(
        ScriptedRunner::new(),
        ScriptedPrompter::new().confirms(&[true]).answers(["sk_test_1"]),
    );
    h.billing.fail_at = Some(2);

    let report = h.use_case().deploy("render").unwrap();

    assert_eq!(h.billing.calls.borrow().len(), 2);
    assert_eq!(
        h.sink.failures(),
        vec!["Error setting up Stripe: billing API error (402): Your card was declined"]
    );
    assert!(report.is_success());
}

#[test]
fn blank_stripe_key_skips_api() {
    let h = Harness::new(
        ScriptedRunner::new(),
        ScriptedPrompter::new().confirms(&[true]).answers(["   "]),
    );

    h.use_case().deploy("render").unwrap();

    assert!(h.billing.keys.borrow().is_empty());
    assert!(h.sink.has(|e| matches!(e, DeployEvent::BillingSkipped)));
}

#[test]
fn live_url_produces_summary() {
    let h = Harness::new(
        ScriptedRunner::new().respond(
            "vercel --prod",
            CommandOutput::ok("https://optionscope.vercel.app\n"),
        ),
        ScriptedPrompter::new(),
    );

    let report = h.use_case().deploy("vercel").unwrap();

    assert_eq!(report.url(), Some("https://optionscope.vercel.app"));
    assert!(h.sink.has(|e| matches!(
        e,
        DeployEvent::Completed { url } if url == "https://optionscope.vercel.app"
    )));
}

#[test]
fn failed_routine_reports_nothing_live() {
    let h = Harness::new(
        ScriptedRunner::new().respond("vercel --prod", CommandOutput::failed(1, "boom")),
        ScriptedPrompter::new(),
    );

    let report = h.use_case().deploy("vercel").unwrap();

    assert_eq!(
        report,
        DeployReport::Failed {
            platform: Platform::Vercel
        }
    );
    assert!(!h.sink.has(|e| matches!(
        e,
        DeployEvent::Completed { .. } | DeployEvent::Deployed { .. }
    )));
}

#[test]
fn manual_follow_up_has_no_summary() {
    let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new());

    let report = h.use_case().deploy("railway").unwrap();

    assert_eq!(
        report,
        DeployReport::Finished {
            platform: Platform::Railway,
            outcome: DeployOutcome::manual("Check Railway dashboard for your app URL"),
        }
    );
    assert!(h.sink.has(|e| matches!(e, DeployEvent::ManualFollowUp { .. })));
    assert!(!h.sink.has(|e| matches!(e, DeployEvent::Completed { .. })));
}

#[test]
fn menu_choice_selects_platform() {
    let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new().answers(["3"]));

    assert_eq!(h.use_case().choose_platform().unwrap(), Platform::Railway);
    assert!(h.sink.has(|e| matches!(
        e,
        DeployEvent::Info { message } if message == "4. Render (Simple)"
    )));
}

#[test]
fn invalid_menu_choice_defaults_to_vercel() {
    for answer in ["", "7", "heroku", "0"] {
        let h = Harness::new(ScriptedRunner::new(), ScriptedPrompter::new().answers([answer]));
        assert_eq!(h.use_case().choose_platform().unwrap(), Platform::Vercel);
    }
}
