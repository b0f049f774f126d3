// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::resource::{Resource, ResourceClient};
use crate::models::{Account, AccountPatch};

impl Resource for Account {
    const COLLECTION: &'static str = "account";
    type Patch = AccountPatch;
}

/// `/account`: plain list/create/update/delete.
pub type AccountClient = ResourceClient<Account>;
