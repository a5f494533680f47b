//! Built-in themed tables.
//!
//! Each theme carries a syllable set used for composition and a pair of
//! prefix/suffix word lists used by the word-combination fallback.

pub(crate) struct BuiltinTheme {
	pub name: &'static str,
	pub units: &'static [&'static str],
	pub prefixes: &'static [&'static str],
	pub suffixes: &'static [&'static str],
}

pub(crate) const BUILTIN_THEMES: [BuiltinTheme; 4] = [CUTE, COOL, FUNNY, FANTASY];

const CUTE: BuiltinTheme = BuiltinTheme {
	name: "cute",
	units: &[
		"나", "미", "유", "리", "아", "민", "지", "은", "하", "서", "연", "수", "예", "다", "소", "별", "달",
		"구름", "꽃", "봄", "여름", "가을", "겨울", "노을", "바다", "하늘", "사랑", "희망", "빛", "요", "니",
		"루", "모", "보", "로", "코", "토", "포", "빈", "송", "이", "새", "린", "채", "단", "솔", "담", "해",
		"샛", "별님", "달님", "초롱", "향기", "방울", "반짝", "포근", "보송", "몽실", "보들", "노리", "두리",
		"동글", "말랑", "쫑긋", "토실", "통통", "방긋", "포실", "무지개", "은하수", "별빛", "햇살",
	],
	prefixes: &[
		"귀여운", "사랑스런", "포근한", "달콤한", "보들보들", "뽀송뽀송", "몽글몽글", "폭신폭신", "아기", "꼬마",
		"미니",
	],
	suffixes: &[
		"토끼", "햄스터", "강아지", "고양이", "판다", "코알라", "다람쥐", "병아리", "펭귄", "구름", "솜사탕",
		"마시멜로", "별", "달",
	],
};

const COOL: BuiltinTheme = BuiltinTheme {
	name: "cool",
	units: &[
		"강", "혁", "준", "석", "진", "태", "현", "호", "철", "범", "건", "성", "용", "승", "찬", "우", "훈",
		"영", "무", "검", "칼", "불", "천", "왕", "제", "군", "장", "신", "투", "크", "스", "엑", "제트",
		"블랙", "다크", "레드", "블루", "룡", "호랑", "맹호", "백호", "청룡", "흑룡", "적룡", "금강", "백전",
		"무패", "절대", "극한", "초월", "암흑", "폭풍", "번개", "천둥", "화염", "빙결", "섬광", "진격", "돌격",
		"맹렬", "격파", "필살", "격전", "혈투", "결전",
	],
	prefixes: &["멋진", "강력한", "냉철한", "어둠의", "전설의", "무적의", "최강", "불멸의"],
	suffixes: &[
		"늑대", "독수리", "호랑이", "용", "사자", "매", "전사", "기사", "암살자", "검사", "마법사", "현자",
		"제왕", "군주",
	],
};

const FUNNY: BuiltinTheme = BuiltinTheme {
	name: "funny",
	units: &[
		"뿡", "빵", "똥", "방", "퐁", "팡", "퍽", "퉁", "쿵", "덩", "두", "부", "쿠", "푸", "루", "무", "뚱",
		"뿌", "삐", "뽀", "뚜", "또", "호호", "키키", "흐흐", "뭉", "몽", "봉", "롱", "콩", "땅콩", "호박",
		"감자", "고구마", "당근", "깡총", "껑충", "폴짝", "통통", "덜렁", "뒹굴", "데굴", "뿅", "꾸물", "아용",
		"냠냠", "쩝쩝", "우물", "뚱땡", "둥둥", "엉금", "꼬물", "촐랑", "덜컥", "허겁", "벌컥", "쭈욱", "쪼그",
		"굴렁", "딱딱이", "말랑이", "흔들이", "둥글이",
	],
	prefixes: &[
		"웃긴", "황당한", "빵터지는", "어이없는", "이상한", "괴상한", "엉뚱한", "말도안되는", "미친",
	],
	suffixes: &[
		"감자", "고구마", "양파", "당근", "호박", "피자", "치킨", "떡볶이", "라면", "김밥", "돈까스", "햄버거",
		"만두", "순대",
	],
};

const FANTASY: BuiltinTheme = BuiltinTheme {
	name: "fantasy",
	units: &[
		"엘", "리", "아", "스", "라", "미", "카", "사", "나", "에", "르", "드", "다", "루", "시", "온", "안",
		"레", "디", "오", "제", "린", "로", "샤", "리엘", "미르", "세라", "루나", "노바", "스타", "오로라",
		"네오", "아리아", "레온", "카이", "제로", "루시", "아스", "트라", "엘리", "실버", "크리스", "알렉",
		"세이", "프리", "라파", "가브", "우리", "미카", "라지", "소피", "테오", "리안", "니엘", "윈", "플로",
		"에테", "아르", "벨라", "셀레", "아제", "베르", "클라", "엘사", "이리스", "페니", "키라", "젤다",
		"하이", "제피", "루비", "에스", "실리", "엔젤",
	],
	prefixes: &[
		"신성한", "전설의", "불멸의", "영원한", "고대의", "신비한", "마법의", "초월한", "신화의",
	],
	suffixes: &[
		"드래곤", "피닉스", "유니콘", "그리폰", "히드라", "켄타우로스", "페가수스", "요정", "엘프", "마법사",
		"현자", "성기사",
	],
};

/// Awkward doubled tense-consonant sequences rejected by the validator.
pub(crate) const DEFAULT_BLACKLIST: &[&str] = &[
	"까까", "꺼꺼", "끄끄", "따따", "떠떠", "뜨뜨", "빠빠", "뻐뻐", "쁘쁘", "싸싸", "써써", "쓰쓰", "짜짜",
	"쩌쩌", "쯔쯔",
];
