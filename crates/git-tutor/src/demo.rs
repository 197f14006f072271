// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Built-in sample repository for trying the tutor without a real log

/// URL shown for the sample repository
pub const DEMO_REPO_URL: &str = "https://github.com/example/demo-project";

/// Description shown for the sample repository
pub const DEMO_DESCRIPTION: &str =
    "A NestJS backend service for managing user authentication and analytics dashboards.";

/// Five commits with `--stat` lines: feat, fix, refactor, perf, security
pub const DEMO_GIT_LOG: &str = "
commit a1b2c3d
Author: Sarah Dev <sarah@example.com>
Date:   2023-10-05 14:30:00
Message: feat: Implement JWT authentication logic

 src/auth/auth.service.ts | 45 +++++++++++++++++++++++++++++++
 src/auth/jwt.strategy.ts | 30 +++++++++++++++++++++
 src/app.module.ts        |  5 ++++
 3 files changed, 80 insertions(+)

commit d4e5f6g
Author: Mike Junior <mike@example.com>
Date:   2023-10-06 09:15:00
Message: fix: Resolve null pointer in user session handling causing crash on login

 src/users/users.controller.ts | 12 ++++--------
 1 file changed, 4 insertions(+), 8 deletions(-)

commit h7i8j9k
Author: Sarah Dev <sarah@example.com>
Date:   2023-10-07 11:20:00
Message: refactor: Extract validation logic into reusable middleware service

 src/common/validation.pipe.ts | 50 +++++++++++++++++++++++++++++++++++
 src/users/users.controller.ts | 25 -----------------
 2 files changed, 50 insertions(+), 25 deletions(-)

commit l0m1n2o
Author: Alex Lead <alex@example.com>
Date:   2023-10-08 16:45:00
Message: perf: Optimize database query for dashboard analytics (reduced load time by 40%)

 src/analytics/analytics.repository.ts | 15 +++++++--------
 src/analytics/analytics.service.ts    |  5 +----
 2 files changed, 10 insertions(+), 12 deletions(-)

commit p3q4r5s
Author: Mike Junior <mike@example.com>
Date:   2023-10-09 10:00:00
Message: security: Sanitize user input to prevent XSS attacks

 src/utils/sanitize.ts | 20 ++++++++++++++++++++
 src/main.ts | 4 ++--
 2 files changed, 22 insertions(+), 2 deletions(-)
";
