//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 출력되는 운영 정보 배너를 구성하는 함수들을 제공합니다.
//! 박스 형태의 제목, 섹션 헤더, 트리 구조의 항목 표시를 지원합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use google_auth_gateway::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("GATEWAY READY");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  GATEWAY READY                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 배너의 섹션 헤더를 출력합니다
///
/// # Examples
///
/// ```text
///   🔐 Google Auth:
/// ```
pub fn print_section(title: &str) {
    println!("  {}", title);
}

/// 라우트 항목을 트리 구조로 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// print_route("Login", "http://localhost:3000/login");
/// ```
///
/// Output:
/// ```text
///    ├─ Login:    http://localhost:3000/login
/// ```
pub fn print_route(label: &str, url: &str) {
    println!("   ├─ {:<10} {}", format!("{}:", label), url);
}

/// 구성 요소와 상태를 트리 구조로 출력합니다
///
/// # Examples
///
/// ```text
///    ├─ UserStore: Memory
/// ```
pub fn print_component(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_helpers_do_not_panic() {
        // 출력 포맷 함수는 어떤 입력에도 panic 없이 동작해야 함
        print_boxed_title("🔐 GOOGLE AUTH GATEWAY");
        print_boxed_title("");
        print_section("📍 Pages:");
        print_route("Login", "http://localhost:3000/login");
        print_route("", "");
        print_component("UserStore", "Memory");
    }
}
