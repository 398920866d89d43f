use crate::{
    models::{VideoRecord, LIVE_DURATION},
    services::images::{placeholder_image, CHANNEL_AVATAR_SIZE, THUMBNAIL_SIZE},
};

const SAMPLE_MEDIA_BASE: &str = "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

struct BaselineEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    thumbnail_seed: &'static str,
    media_file: &'static str,
    channel_name: &'static str,
    avatar_seed: &'static str,
    views: &'static str,
    uploaded_at: &'static str,
    duration: &'static str,
}

const BASELINE: [BaselineEntry; 8] = [
    BaselineEntry {
        id: "1",
        title: "Building a Clone of YouTube in 1 Hour",
        description: "In this video, we attempt the impossible: rebuilding the frontend of a major video platform using React and Tailwind CSS in record time.",
        thumbnail_seed: "tech1",
        media_file: "BigBuckBunny.mp4",
        channel_name: "Code Master",
        avatar_seed: "avatar1",
        views: "1.2M views",
        uploaded_at: "2 days ago",
        duration: "12:45",
    },
    BaselineEntry {
        id: "2",
        title: "Top 10 Travel Destinations for 2025",
        description: "Join us as we explore the most breathtaking locations you need to visit this year. From mountains to beaches, we cover it all.",
        thumbnail_seed: "travel2",
        media_file: "ElephantsDream.mp4",
        channel_name: "Wanderlust",
        avatar_seed: "avatar2",
        views: "850K views",
        uploaded_at: "1 week ago",
        duration: "8:30",
    },
    BaselineEntry {
        id: "3",
        title: "Satisfying Kinetic Sand ASMR",
        description: "Relax and unwind with the most satisfying kinetic sand cutting and squishing sounds. Headphones recommended!",
        thumbnail_seed: "asmr3",
        media_file: "ForBiggerBlazes.mp4",
        channel_name: "Chill Vibes",
        avatar_seed: "avatar3",
        views: "3.4M views",
        uploaded_at: "3 days ago",
        duration: "15:00",
    },
    BaselineEntry {
        id: "4",
        title: "How to Cook the Perfect Steak",
        description: "Gordon Ramsay hates this one trick! Learn how to get that perfect sear and medium-rare inside every single time.",
        thumbnail_seed: "food4",
        media_file: "ForBiggerEscapes.mp4",
        channel_name: "Chef's Table",
        avatar_seed: "avatar4",
        views: "2.1M views",
        uploaded_at: "5 hours ago",
        duration: "10:15",
    },
    BaselineEntry {
        id: "5",
        title: "Reviewing the New AI Gadget",
        description: "Is this the future of technology? We unbox and review the latest AI wearable that everyone is talking about.",
        thumbnail_seed: "gadget5",
        media_file: "ForBiggerFun.mp4",
        channel_name: "Tech Trends",
        avatar_seed: "avatar5",
        views: "500K views",
        uploaded_at: "1 day ago",
        duration: "18:20",
    },
    BaselineEntry {
        id: "6",
        title: "Lofi Hip Hop Radio - Beats to Relax/Study to",
        description: "24/7 streaming for your study needs. Chill beats and good vibes only.",
        thumbnail_seed: "lofi6",
        media_file: "ForBiggerJoyrides.mp4",
        channel_name: "Lofi Girl Clone",
        avatar_seed: "avatar6",
        views: "10M views",
        uploaded_at: LIVE_DURATION,
        duration: LIVE_DURATION,
    },
    BaselineEntry {
        id: "7",
        title: "Why Cats Are Actually Aliens",
        description: "The evidence is overwhelming. In this documentary, we explore the truth about our feline friends.",
        thumbnail_seed: "cat7",
        media_file: "ForBiggerMeltdowns.mp4",
        channel_name: "Conspiracy Theories",
        avatar_seed: "avatar7",
        views: "900K views",
        uploaded_at: "4 days ago",
        duration: "22:10",
    },
    BaselineEntry {
        id: "8",
        title: "100 Days in Minecraft Hardcore",
        description: "Can I survive 100 days in the harshest environment? Watch to find out!",
        thumbnail_seed: "game8",
        media_file: "Sintel.mp4",
        channel_name: "Gamer Pro",
        avatar_seed: "avatar8",
        views: "5.6M views",
        uploaded_at: "2 weeks ago",
        duration: "45:00",
    },
];

/// Sample media URL for a file in the public sample bucket
pub fn sample_media_url(file: &str) -> String {
    format!("{}/{}", SAMPLE_MEDIA_BASE, file)
}

/// The fixed, non-generated catalog shown before any search
pub fn baseline() -> Vec<VideoRecord> {
    BASELINE
        .iter()
        .map(|entry| VideoRecord {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            thumbnail_url: placeholder_image(entry.thumbnail_seed, THUMBNAIL_SIZE),
            video_url: sample_media_url(entry.media_file),
            channel_name: entry.channel_name.to_string(),
            channel_avatar: placeholder_image(entry.avatar_seed, CHANNEL_AVATAR_SIZE),
            views: entry.views.to_string(),
            uploaded_at: entry.uploaded_at.to_string(),
            duration: entry.duration.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_baseline_is_deterministic() {
        assert_eq!(baseline(), baseline());
    }

    #[test]
    fn test_baseline_has_eight_unique_records() {
        let videos = baseline();
        assert_eq!(videos.len(), 8);

        let ids: HashSet<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_baseline_urls() {
        let videos = baseline();
        assert_eq!(videos[0].thumbnail_url, "https://picsum.photos/seed/tech1/640/360");
        assert_eq!(videos[0].channel_avatar, "https://picsum.photos/seed/avatar1/100/100");
        assert_eq!(
            videos[7].video_url,
            "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4"
        );
    }

    #[test]
    fn test_baseline_contains_live_stream() {
        let live: Vec<_> = baseline().into_iter().filter(|v| v.duration == LIVE_DURATION).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].channel_name, "Lofi Girl Clone");
    }
}
