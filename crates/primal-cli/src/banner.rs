// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Shown once at the top of an interactive session.
pub(crate) const BANNER: &str = r"
                 _                 _
      _ __  _ __(_)_ __ ___   __ _| |
     | '_ \| '__| | '_ ` _ \ / _` | |
     | |_) | |  | | | | | | | (_| | |
     | .__/|_|  |_|_| |_| |_|\__,_|_|
     |_|

";
