//! Static text content of the development guide.
//!
//! Everything here is document copy. Keeping it apart from the assembly
//! code in the parent module makes wording changes reviewable on their own.

/// Problems listed in section 1.
pub(super) const PROBLEMS: [&str; 4] = [
    "새로운 기능을 추가하면 기존에 잘 되던 기능이 갑자기 안 됨",
    "Claude와 대화가 길어지면 앞에서 만든 코드를 잊어버림",
    "새 대화창에서 시작하면 프로젝트를 처음부터 다시 설명해야 함",
    "어디까지 개발했는지 헷갈리고 정리가 안 됨",
];

/// Folder layout table in section 2-1: (folder, what goes in it).
pub(super) const FOLDER_STRUCTURE: [(&str, &str); 6] = [
    ("📁 핵심기능", "로그인, 회원가입 등 모든 곳에서 쓰는 기능"),
    ("📁 학생관리", "학생 등록, 수정, 삭제 관련 기능"),
    ("📁 수업관리", "수업 생성, 시간표 관련 기능"),
    ("📁 출석관리", "출석 체크, 출석부 관련 기능"),
    ("📁 성적관리", "시험 점수, 성적표 관련 기능"),
    ("📁 백업폴더", "중요한 시점의 코드 백업본 보관"),
];

/// Regression checklist items in STEP 3.
pub(super) const CHECKLIST: [&str; 5] = [
    "로그인이 여전히 잘 되나요?",
    "학생 목록이 제대로 보이나요?",
    "이전에 만든 메뉴들이 모두 작동하나요?",
    "화면이 깨지지 않았나요?",
    "에러 메시지가 뜨지 않나요?",
];

/// Recommended daily work order in section 5: (step name, description).
pub(super) const WORK_ORDER: [(&str, &str); 6] = [
    ("계획", "오늘 만들 기능 1개만 정하기"),
    ("백업", "현재 코드를 날짜별 폴더에 복사"),
    ("Claude 대화 시작", "프로젝트 현황과 오늘 할 일만 설명"),
    ("개발", "한 번에 하나씩만 추가"),
    ("테스트", "체크리스트로 기존 기능 확인"),
    ("기록", "프로젝트_현황.txt 업데이트"),
];

/// Troubleshooting table in section 6: (problem, solution).
pub(super) const PROBLEMS_SOLUTIONS: [(&str, &str); 5] = [
    (
        "Claude가 이전 내용을 잊어버려요",
        "프로젝트_현황.txt 내용을 복사해서 대화 시작할 때마다 보여주세요",
    ),
    (
        "새 기능 추가했더니 기존 기능이 안 돼요",
        "백업 폴더에서 이전 버전을 복원하고 다시 시도하세요",
    ),
    (
        "어디까지 했는지 모르겠어요",
        "프로젝트_현황.txt를 매일 업데이트하세요",
    ),
    (
        "Claude가 전체 코드를 다 수정해버려요",
        "\"출석 폴더의 파일만 수정해줘\" 라고 명확히 요청하세요",
    ),
    (
        "대화가 너무 길어졌어요",
        "현재 작업을 마무리하고 새 대화창에서 다음 기능 시작하세요",
    ),
];

/// Golden rules in section 8.
pub(super) const GOLDEN_RULES: [&str; 6] = [
    "한 번에 한 가지 기능만 만들기",
    "매일 백업하기",
    "프로젝트 현황 문서 업데이트하기",
    "Claude에게 명확한 범위 지정하기",
    "체크리스트로 검증하기",
    "문제 생기면 백업에서 복원하기",
];

/// Status-file example shown in STEP 1, after the bold first line.
pub(super) const STATUS_FILE_LINES: [&str; 15] = [
    "\n",
    "🟢 완성된 기능:\n",
    "  - 로그인/로그아웃 ✓\n",
    "  - 학생 등록 ✓\n",
    "\n",
    "🟡 개발 중인 기능:\n",
    "  - 출석 체크 기능\n",
    "\n",
    "🔴 아직 안 만든 기능:\n",
    "  - 성적 관리\n",
    "  - 학부모 알림\n",
    "\n",
    "⚠️ 절대 수정하면 안 되는 것:\n",
    "  - login.js 파일\n",
    "  - database 설정 파일\n",
];

/// Conversation-opening example shown in STEP 2, after the bold first line.
pub(super) const CONVERSATION_LINES: [&str; 8] = [
    "─────────────────────────\n",
    "\"안녕 Claude, 학원 LMS 프로젝트를 진행 중이야.\n",
    "현재 상황:\n",
    "- 로그인 기능 완성됨\n",
    "- 학생 관리 완성됨\n",
    "- 지금 출석 관리 기능만 추가하고 싶어\n",
    "- 다른 기능은 절대 건드리지 마\n",
    "여기 출석 관리 폴더의 코드야: [코드 붙여넣기]\"",
];

/// Backup folder example in section 4, after the bold first line.
pub(super) const BACKUP_LINES: [&str; 3] = [
    "📁 백업_2024_11_20_출석전\n",
    "📁 백업_2024_11_21_성적전\n",
    "📁 백업_2024_11_22_최종완성\n",
];

/// Copy-paste request template in section 7, after the bold first line.
pub(super) const REQUEST_TEMPLATE_LINES: [&str; 13] = [
    "프로젝트: 학원 LMS 시스템\n",
    "기술: React, Node.js, MySQL\n\n",
    "✅ 완성된 기능:\n",
    "- [완성된 기능 리스트]\n\n",
    "🎯 오늘 만들 기능:\n",
    "- [한 가지 기능만 작성]\n\n",
    "📁 작업할 폴더:\n",
    "- [폴더명] 폴더만 수정\n\n",
    "⚠️ 주의사항:\n",
    "- 다른 폴더의 파일은 수정하지 마세요\n",
    "- 기존 로그인 기능은 그대로 유지해주세요\n\n",
    "현재 코드:\n",
    "[해당 폴더의 코드 붙여넣기]",
];

/// Closing paragraphs in the final section.
pub(super) const CLOSING: [&str; 3] = [
    "이 가이드를 따라 하시면 대규모 프로젝트도 체계적으로 관리할 수 있습니다.",
    "처음에는 번거로워 보일 수 있지만, 이렇게 하면 오히려 시간을 절약하고 ",
    "스트레스를 줄일 수 있습니다.",
];
