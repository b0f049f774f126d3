// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod utils;
