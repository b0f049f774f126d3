// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::resource::{Resource, ResourceClient};
use crate::models::{Goal, GoalPatch};

impl Resource for Goal {
    const COLLECTION: &'static str = "goal";
    type Patch = GoalPatch;
}

pub type GoalClient = ResourceClient<Goal>;
