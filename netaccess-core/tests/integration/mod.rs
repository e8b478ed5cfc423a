// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests
//!
//! End-to-end workflows: configuration file to selector to settings changes.

mod custom_table_test;
mod settings_workflow_test;
