//! Google OAuth 사용자 프로필 모델

use serde::Deserialize;

/// Google UserInfo 엔드포인트가 반환하는 사용자 프로필
///
/// `https://www.googleapis.com/oauth2/v2/userinfo` 응답을 역직렬화하기 위한
/// 구조체입니다. 로그인 시도당 한 번 생성되어 사용자 리졸브 과정에서
/// 정확히 한 번 소비됩니다.
///
/// ## 필드별 필요 스코프
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id` | `openid` |
/// | `email`, `verified_email` | `email` |
/// | `name`, `picture` | `profile` |
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Google 사용자 고유 식별자. 변경되지 않으며 계정 매칭의 기준입니다.
    pub id: String,
    /// 사용자 이메일 주소
    pub email: String,
    /// 사용자 표시 이름
    pub name: String,
    /// 프로필 사진 URL. 설정하지 않은 계정은 생략될 수 있습니다.
    #[serde(default)]
    pub picture: Option<String>,
    /// Google이 이메일 소유권을 검증했는지 여부
    #[serde(default)]
    pub verified_email: bool,
}
