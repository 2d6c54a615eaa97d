// SPDX-License-Identifier: MPL-2.0
use gobarber::app::config::{self, Config, ToastConfig};
use gobarber::ui::toast::{
    Change, NewToast, Phase, Presenter, ToastId, ToastKind, ToastProvider, Toaster, Tween,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Mirrors one pass of the application update loop.
struct Harness {
    provider: ToastProvider,
    toaster: Toaster,
    presenter: Presenter,
    start: Instant,
}

impl Harness {
    fn new() -> Self {
        let provider = ToastProvider::new();
        let toaster = provider.toaster();
        Self {
            provider,
            toaster,
            presenter: Presenter::default(),
            start: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }

    fn step(&mut self, ms: u64) -> Vec<Change> {
        let now = self.at(ms);
        let changes = self.provider.flush();
        self.presenter.sync(self.provider.store(), now);
        changes
    }

    fn tick(&mut self, ms: u64) -> Vec<Change> {
        self.presenter.tick(self.at(ms), &self.toaster);
        self.step(ms)
    }

    fn ids(&self) -> Vec<ToastId> {
        self.provider.store().ids().collect()
    }
}

#[test]
fn authentication_error_adds_one_error_toast() {
    let mut h = Harness::new();
    h.toaster.add_toast(NewToast::success("anterior"));
    h.step(0);
    let before = h.ids();

    h.toaster.add_toast(NewToast {
        kind: Some(ToastKind::Error),
        title: "Erro na autenticação".to_string(),
        description: Some("Ocorreu um erro ao fazer login, cheque as credenciais.".to_string()),
    });
    h.step(10);

    let after = h.ids();
    assert_eq!(after.len(), before.len() + 1);
    let new_id = *after.last().expect("new toast");
    assert!(!before.contains(&new_id));
    let toast = h.provider.store().get(new_id).expect("stored");
    assert_eq!(toast.kind(), ToastKind::Error);
}

#[test]
fn untouched_toast_expires_exactly_once() {
    let mut h = Harness::new();
    h.toaster.add_toast(NewToast::new("Agendamento confirmado"));
    h.step(0);
    let id = h.ids()[0];

    assert!(h.tick(1000).is_empty());
    assert!(h.tick(2990).is_empty());
    assert_eq!(h.tick(3000), vec![Change::Removed(id)]);
    assert!(h.tick(3016).is_empty());
    assert!(h.tick(6000).is_empty());
    assert!(h.presenter.is_empty());
}

#[test]
fn dismissal_at_500ms_wins_over_expiry() {
    let mut h = Harness::new();
    h.toaster.add_toast(NewToast::new("Aviso"));
    h.step(0);
    let id = h.ids()[0];

    h.presenter.dismiss(id, &h.toaster);
    assert_eq!(h.step(500), vec![Change::Removed(id)]);

    for ms in [800, 3000, 3100, 5000] {
        assert!(h.tick(ms).is_empty(), "unexpected removal at {ms}ms");
    }
    assert!(h.provider.store().is_empty());
    assert!(h.presenter.is_empty());
}

#[test]
fn order_is_preserved_and_removal_keeps_the_rest() {
    let mut h = Harness::new();
    h.toaster.add_toast(NewToast::new("A"));
    h.toaster.add_toast(NewToast::new("B"));
    h.step(0);
    let ids = h.ids();
    let (a, b) = (ids[0], ids[1]);

    h.toaster.remove_toast(a);
    h.step(100);
    assert_eq!(h.ids(), vec![b]);

    h.toaster.remove_toast(a);
    assert!(h.step(120).is_empty());
    assert_eq!(h.ids(), vec![b]);
}

#[test]
fn toast_without_kind_is_info() {
    let mut h = Harness::new();
    h.toaster.add_toast(NewToast::new("Sem tipo"));
    h.step(0);

    let view = h.presenter.views().next().expect("mounted");
    assert_eq!(view.toast().kind(), ToastKind::Info);
    assert_eq!(view.phase(), Phase::Entering);
}

#[test]
fn configured_timings_drive_the_presenter() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let written = Config {
        toasts: ToastConfig {
            display_ms: Some(1000),
            reduce_motion: Some(true),
            ..ToastConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&written, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let mut provider = ToastProvider::new();
    let toaster = provider.toaster();
    let mut presenter = Presenter::new(loaded.toasts.tween(), loaded.toasts.display_duration());
    assert_eq!(loaded.toasts.tween(), Tween::immediate());

    let t0 = Instant::now();
    toaster.add_toast(NewToast::new("rápido"));
    provider.flush();
    presenter.sync(provider.store(), t0);

    assert_eq!(presenter.tick(t0 + Duration::from_millis(1000), &toaster), 1);
    provider.flush();
    presenter.sync(provider.store(), t0 + Duration::from_millis(1000));
    presenter.tick(t0 + Duration::from_millis(1000), &toaster);
    assert!(presenter.is_empty());
}
