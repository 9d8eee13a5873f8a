// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn add_action_effects() {
    use ActionEffect::{Changed, MaybeChanged, Unchanged};
    assert_eq!(Unchanged, Unchanged + Unchanged);
    assert_eq!(MaybeChanged, Unchanged + MaybeChanged);
    assert_eq!(MaybeChanged, MaybeChanged + Unchanged);
    assert_eq!(Changed, MaybeChanged + Changed);
    assert_eq!(Changed, Changed + Unchanged);

    let mut effect = Unchanged;
    effect += MaybeChanged;
    assert_eq!(MaybeChanged, effect);
    effect += Unchanged;
    assert_eq!(MaybeChanged, effect);
    effect += Changed;
    assert_eq!(Changed, effect);
}

#[test]
fn changed_if() {
    assert_eq!(ActionEffect::Changed, ActionEffect::changed_if(true));
    assert!(ActionEffect::changed_if(false).is_unchanged());
}

#[tokio::test]
async fn join_completed_task() {
    let handle = tokio::task::spawn_blocking(|| 42);
    assert!(matches!(
        JoinedTask::join(handle).await,
        JoinedTask::Completed(42)
    ));
}
